use std::sync::Arc;

use crate::tools::logger::Logger;

#[derive(Clone)]
pub struct CliContext {
    logger: Arc<Logger>,
    quiet: bool,
}

impl CliContext {
    pub fn new(quiet: bool) -> Self {
        Self {
            logger: Arc::new(Logger::with_quiet(quiet)),
            quiet,
        }
    }

    pub fn logger(&self) -> Arc<Logger> {
        Arc::clone(&self.logger)
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }
}
