use core::fmt;

/// Failure while drawing a screen.
#[derive(Debug)]
pub enum UiError<E> {
    /// The draw target rejected a draw call
    Display(E),
    /// Text rendering failed
    Font(u8g2_fonts::Error<E>),
}

impl<E> From<u8g2_fonts::Error<E>> for UiError<E> {
    fn from(err: u8g2_fonts::Error<E>) -> Self {
        UiError::Font(err)
    }
}

impl<E: fmt::Debug> fmt::Display for UiError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::Display(err) => write!(f, "display error: {:?}", err),
            UiError::Font(err) => write!(f, "font error: {:?}", err),
        }
    }
}
