use std::fs;

use tracing::debug;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Resolves an `import` statement.
    ///
    /// The path is joined onto the context's base directory (the importing
    /// file's directory when running a file). The file must exist and be
    /// readable as text. Its declarations are not merged into scope.
    ///
    /// # Errors
    /// - [`RuntimeError::ImportNotFound`] if nothing exists at the path.
    /// - [`RuntimeError::ImportUnreadable`] if it cannot be read, e.g. a
    ///   directory or a file that is not UTF-8.
    pub(crate) fn import(&self, path: &str, position: &Position) -> EvalResult<()> {
        let resolved = self.base_dir().join(path);
        debug!(path = %resolved.display(), "resolving import");

        if !resolved.exists() {
            return Err(RuntimeError::ImportNotFound { path:     resolved.display().to_string(),
                                                      position: position.clone(), });
        }

        let source =
            fs::read_to_string(&resolved).map_err(|e| RuntimeError::ImportUnreadable {
                                             path:     resolved.display().to_string(),
                                             reason:   e.to_string(),
                                             position: position.clone(),
                                         })?;

        debug!(path = %resolved.display(), bytes = source.len(), "import resolved");
        Ok(())
    }
}
