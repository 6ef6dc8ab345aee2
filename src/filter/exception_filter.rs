use crate::core::exception::Exception;

/// Decides whether an exception may continue down the chain
pub trait ExceptionFilter {
    /// `true` lets the exception pass, `false` stops the chain
    fn filter(&self, exception: &Exception) -> bool;
}

/// Filter backed by a closure
///
/// # Example
///
/// ```ignore
/// let only_fatal = CallbackFilter::new(|e: &Exception| e.code() >= 500);
/// ```
pub struct CallbackFilter<F>
where
    F: Fn(&Exception) -> bool,
{
    callback: F,
}

impl<F> CallbackFilter<F>
where
    F: Fn(&Exception) -> bool,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> ExceptionFilter for CallbackFilter<F>
where
    F: Fn(&Exception) -> bool,
{
    fn filter(&self, exception: &Exception) -> bool {
        (self.callback)(exception)
    }
}
