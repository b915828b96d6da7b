pub mod remove_background_viewmodel;

pub use remove_background_viewmodel::RemoveBackgroundViewModel;

use crate::services::{ApiClient, BrowserDownloader, ToastNotifier};

/// ViewModel con los servicios reales del navegador
pub type AppViewModel = RemoveBackgroundViewModel<ApiClient, BrowserDownloader, ToastNotifier>;
