use courier_application::{
    error::{AppError, AppResult, BoxError},
    ports::outgoing::email_template::EmailTemplatePort,
};
use tera::{Context, Tera};

/// One named tera template. Names ending in `.html` get tera's HTML autoescaping.
pub struct TeraEmailTemplate {
    engine: Tera,
    name: String,
}

impl TeraEmailTemplate {
    pub fn from_source(name: &str, source: &str) -> AppResult<Self> {
        let mut engine = Tera::default();
        engine
            .add_raw_template(name, source)
            .map_err(|e| AppError::ConfigError {
                message: format!("invalid template '{name}': {e}"),
            })?;

        Ok(Self {
            engine,
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl EmailTemplatePort for TeraEmailTemplate {
    fn render(&self, data: &serde_json::Value) -> Result<String, BoxError> {
        let context = Context::from_value(data.clone())?;
        Ok(self.engine.render(&self.name, &context)?)
    }
}
