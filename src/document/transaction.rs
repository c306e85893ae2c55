use super::Document;
use tracing::debug;

impl Document {
    /// Runs `f` as one atomic unit of document mutation.
    ///
    /// The document state is snapshotted first; if `f` returns `Err`,
    /// every mutation it made is rolled back before the error is passed
    /// through. Commit and rollback are the only two exits, so a caller
    /// never observes a partially applied pass.
    ///
    /// # Errors
    ///
    /// Propagates whatever error `f` returns.
    pub fn transact<T, E>(
        &mut self,
        name: &str,
        f: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        let snapshot = self.clone();
        debug!("transaction {name:?} started");
        match f(self) {
            Ok(value) => {
                debug!("transaction {name:?} committed");
                Ok(value)
            }
            Err(err) => {
                *self = snapshot;
                debug!("transaction {name:?} rolled back");
                Err(err)
            }
        }
    }
}
