use thiserror::Error;

/// Conditions raised by the widget in response to user input. Both are recoverable: the widget
/// is left exactly as it was before the operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetError {
    /// The submitted name was empty after trimming.
    #[error("Por favor, inserte un nombre.")]
    EmptyName,

    /// A draw was requested before any name was added.
    #[error("Agrega al menos un amigo a la lista")]
    NoCandidates,
}

/// Failures of the terminal host itself, as opposed to the widget.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("could not read or write the terminal: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not read the names file: {0}")]
    Csv(#[from] csv::Error),
}
