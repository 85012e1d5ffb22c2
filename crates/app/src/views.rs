//! View state for each screen.
//!
//! A view owns the data fetched for it and a [`CancellationToken`]. Results
//! are applied only while the token is live, so a fetch that settles after
//! the view was dismissed changes nothing. Presentation adapters turn the
//! resulting view enums into markup.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

pub mod bed_admin;
pub mod bed_form;
pub mod ward;

use bedmgmt_domain::error::BedMgmtError;

/// Lifecycle of data fetched for a view.
#[derive(Debug, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Failed(BedMgmtError),
    Ready(T),
}

impl<T> From<Result<T, BedMgmtError>> for LoadState<T> {
    fn from(result: Result<T, BedMgmtError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }
}
