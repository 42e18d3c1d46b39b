use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to load environment variables for database connection: {0}")]
    ConnectionConfigError(String),

    #[error("Failed to connect to the database")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Failed to ping the database")]
    PingError(#[source] sqlx::Error),

    #[error("Album not found for id {0}")]
    NotFound(i32),

    /// The statement ran but the database rejected the values it was given.
    #[error("The database rejected the submitted values: {0}")]
    Constraint(String),

    #[error("Query failed")]
    Query(#[from] sqlx::Error),
}

impl DbError {
    /// Splits write failures into bad input (SQLSTATE class 22 data exceptions
    /// and class 23 integrity violations) and everything else.
    pub fn from_write(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let client_caused = db_err
                .code()
                .is_some_and(|code| code.starts_with("22") || code.starts_with("23"));
            if client_caused || !matches!(db_err.kind(), sqlx::error::ErrorKind::Other) {
                return DbError::Constraint(db_err.message().to_string());
            }
        }
        DbError::Query(err)
    }
}
