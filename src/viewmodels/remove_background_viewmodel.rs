// ============================================================================
// REMOVE BACKGROUND VIEWMODEL - LÓGICA DEL FORMULARIO
// ============================================================================
// Elegir/limpiar archivo, elegir color y enviar. Sin DOM: los servicios
// llegan por traits y el estado por FormState.
// ============================================================================

use std::rc::Rc;

use crate::dom::events::PropagationControl;
use crate::error::AppError;
use crate::models::{FileHandle, RequestState, Severity};
use crate::services::{BackgroundRemover, Downloader, Notifier};
use crate::state::FormState;
use crate::utils::color::normalize_hex_color;
use crate::utils::constants::{DEFAULT_BG_COLOR, MSG_REMOVE_BACKGROUND_SUCCESS};

/// ViewModel del formulario de eliminación de fondo
pub struct RemoveBackgroundViewModel<R: BackgroundRemover, D, N> {
    state: FormState<R::File>,
    remover: Rc<R>,
    downloader: Rc<D>,
    notifier: Rc<N>,
}

impl<R: BackgroundRemover, D, N> Clone for RemoveBackgroundViewModel<R, D, N> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            remover: self.remover.clone(),
            downloader: self.downloader.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<R, D, N> RemoveBackgroundViewModel<R, D, N>
where
    R: BackgroundRemover,
    D: Downloader,
    N: Notifier,
{
    pub fn new(state: FormState<R::File>, remover: R, downloader: D, notifier: N) -> Self {
        Self {
            state,
            remover: Rc::new(remover),
            downloader: Rc::new(downloader),
            notifier: Rc::new(notifier),
        }
    }

    pub fn state(&self) -> &FormState<R::File> {
        &self.state
    }

    /// Archivo soltado o elegido; None (drop sin archivos aceptados) limpia la selección
    pub fn select_file(&self, file: Option<R::File>) {
        match &file {
            Some(f) => log::info!("📄 [FORM] Archivo seleccionado: {} ({} bytes)", f.file_name(), f.byte_size()),
            None => log::info!("📄 [FORM] Drop sin archivos, selección limpiada"),
        }
        self.state.set_file(file);
    }

    /// Quitar el archivo sin que el click llegue al drop zone (que abriría el selector)
    pub fn clear_file<E: PropagationControl>(&self, trigger: &E) {
        trigger.stop_propagation();
        log::info!("🗑️ [FORM] Archivo descartado");
        self.state.set_file(None);
    }

    /// Color del picker, normalizado a `#rrggbb`
    pub fn set_color(&self, hex: &str) {
        let color = normalize_hex_color(hex, DEFAULT_BG_COLOR);
        self.state.set_bg_color(color);
    }

    /// Enviar imagen + color al backend y descargar el resultado
    pub async fn submit(&self) {
        if self.state.is_in_flight() {
            log::warn!("⚠️ [FORM] Ya hay una petición en curso, ignorando submit");
            return;
        }

        let Some(file) = self.state.get_file() else {
            let err = AppError::NoFileSelected;
            self.notifier.notify(err.user_message(), err.severity());
            return;
        };

        let bg_color = self.state.get_bg_color();
        log::debug!("🎨 [FORM] bgColor = {}", bg_color);

        self.state.set_request_state(RequestState::InFlight);

        match self.remove_and_download(&file, &bg_color).await {
            Ok(filename) => {
                log::info!("✅ [FORM] Fondo eliminado, descargado como {}", filename);
                self.notifier.notify(MSG_REMOVE_BACKGROUND_SUCCESS, Severity::Success);
            }
            Err(e) => {
                log::error!("❌ [FORM] Error removing background: {}", e);
                self.notifier.notify(e.user_message(), e.severity());
            }
        }

        self.state.set_request_state(RequestState::Idle);
    }

    async fn remove_and_download(&self, file: &R::File, bg_color: &str) -> Result<String, AppError> {
        let image = self.remover.remove_background(file, bg_color).await?;
        self.downloader.save_as(&image)?;
        Ok(image.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessedImage;
    use crate::state::Subscribers;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile(String);

    impl FileHandle for FakeFile {
        fn file_name(&self) -> String {
            self.0.clone()
        }

        fn byte_size(&self) -> f64 {
            1024.0
        }
    }

    enum Reply {
        Image { content_disposition: Option<&'static str> },
        Status(u16),
        NetworkDown,
    }

    struct FakeBackend {
        reply: Reply,
        calls: RefCell<Vec<(String, String)>>,
        in_flight_during_call: RefCell<Vec<bool>>,
        watched: RefCell<Option<FormState<FakeFile>>>,
    }

    impl FakeBackend {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
                in_flight_during_call: RefCell::new(Vec::new()),
                watched: RefCell::new(None),
            }
        }
    }

    impl BackgroundRemover for Rc<FakeBackend> {
        type File = FakeFile;

        async fn remove_background(
            &self,
            file: &FakeFile,
            bg_color: &str,
        ) -> Result<ProcessedImage, AppError> {
            self.calls
                .borrow_mut()
                .push((file.file_name(), bg_color.to_string()));
            if let Some(state) = self.watched.borrow().as_ref() {
                self.in_flight_during_call.borrow_mut().push(state.is_in_flight());
            }

            match self.reply {
                Reply::Image { content_disposition } => Ok(ProcessedImage::from_response_parts(
                    vec![0xff, 0xd8],
                    Some("image/jpeg"),
                    content_disposition,
                )),
                Reply::Status(status) => Err(AppError::Http {
                    status,
                    status_text: "error".to_string(),
                }),
                Reply::NetworkDown => Err(AppError::Network("failed to fetch".to_string())),
            }
        }
    }

    #[derive(Default)]
    struct FakeDownloader {
        saved: RefCell<Vec<String>>,
        fail: bool,
    }

    impl Downloader for Rc<FakeDownloader> {
        fn save_as(&self, image: &ProcessedImage) -> Result<(), AppError> {
            if self.fail {
                return Err(AppError::Download("createObjectURL failed".to_string()));
            }
            self.saved.borrow_mut().push(image.filename.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        seen: RefCell<Vec<(String, Severity)>>,
    }

    impl Notifier for Rc<FakeNotifier> {
        fn notify(&self, message: &str, severity: Severity) {
            self.seen.borrow_mut().push((message.to_string(), severity));
        }
    }

    #[derive(Default)]
    struct FakeClick {
        stopped: Cell<bool>,
    }

    impl PropagationControl for FakeClick {
        fn stop_propagation(&self) {
            self.stopped.set(true);
        }
    }

    type TestViewModel = RemoveBackgroundViewModel<Rc<FakeBackend>, Rc<FakeDownloader>, Rc<FakeNotifier>>;

    struct Harness {
        vm: TestViewModel,
        backend: Rc<FakeBackend>,
        downloader: Rc<FakeDownloader>,
        notifier: Rc<FakeNotifier>,
    }

    fn harness_with(reply: Reply, downloader: FakeDownloader) -> Harness {
        let state = FormState::new(Subscribers::new());
        let backend = Rc::new(FakeBackend::new(reply));
        *backend.watched.borrow_mut() = Some(state.clone());
        let downloader = Rc::new(downloader);
        let notifier = Rc::new(FakeNotifier::default());
        let vm = RemoveBackgroundViewModel::new(
            state,
            backend.clone(),
            downloader.clone(),
            notifier.clone(),
        );
        Harness { vm, backend, downloader, notifier }
    }

    fn harness(reply: Reply) -> Harness {
        harness_with(reply, FakeDownloader::default())
    }

    fn png() -> Option<FakeFile> {
        Some(FakeFile("cat.png".to_string()))
    }

    #[test]
    fn submit_without_file_warns_and_sends_nothing() {
        let h = harness(Reply::Image { content_disposition: None });

        block_on(h.vm.submit());

        assert!(h.backend.calls.borrow().is_empty());
        assert!(h.downloader.saved.borrow().is_empty());
        assert_eq!(
            *h.notifier.seen.borrow(),
            vec![("No file selected".to_string(), Severity::Warning)]
        );
        assert_eq!(h.vm.state().get_request_state(), RequestState::Idle);
    }

    #[test]
    fn successful_submit_downloads_with_header_filename() {
        let h = harness(Reply::Image {
            content_disposition: Some(r#"attachment; filename="out.png""#),
        });
        h.vm.select_file(png());

        block_on(h.vm.submit());

        assert_eq!(*h.downloader.saved.borrow(), vec!["out.png".to_string()]);
        assert_eq!(
            *h.notifier.seen.borrow(),
            vec![("Background removed successfully!".to_string(), Severity::Success)]
        );
    }

    #[test]
    fn successful_submit_without_header_uses_default_filename() {
        let h = harness(Reply::Image { content_disposition: None });
        h.vm.select_file(png());

        block_on(h.vm.submit());

        assert_eq!(*h.downloader.saved.borrow(), vec!["processed-image.jpg".to_string()]);
    }

    #[test]
    fn request_is_in_flight_only_while_the_call_runs() {
        let h = harness(Reply::Image { content_disposition: None });
        h.vm.select_file(png());
        assert!(!h.vm.state().is_in_flight());

        block_on(h.vm.submit());

        assert_eq!(*h.backend.in_flight_during_call.borrow(), vec![true]);
        assert!(!h.vm.state().is_in_flight());
    }

    #[test]
    fn non_ok_status_reports_one_failure_and_no_download() {
        let h = harness(Reply::Status(500));
        h.vm.select_file(png());

        block_on(h.vm.submit());

        assert!(h.downloader.saved.borrow().is_empty());
        assert_eq!(
            *h.notifier.seen.borrow(),
            vec![("Failed to remove background".to_string(), Severity::Error)]
        );
        assert!(!h.vm.state().is_in_flight());
    }

    #[test]
    fn network_error_is_reported_like_http_error() {
        let h = harness(Reply::NetworkDown);
        h.vm.select_file(png());

        block_on(h.vm.submit());

        assert_eq!(h.backend.calls.borrow().len(), 1);
        assert_eq!(
            *h.notifier.seen.borrow(),
            vec![("Failed to remove background".to_string(), Severity::Error)]
        );
        assert!(!h.vm.state().is_in_flight());
    }

    #[test]
    fn download_failure_after_ok_response_is_a_failure() {
        let h = harness_with(
            Reply::Image { content_disposition: None },
            FakeDownloader { fail: true, ..FakeDownloader::default() },
        );
        h.vm.select_file(png());

        block_on(h.vm.submit());

        assert_eq!(
            *h.notifier.seen.borrow(),
            vec![("Failed to remove background".to_string(), Severity::Error)]
        );
        assert!(!h.vm.state().is_in_flight());
    }

    #[test]
    fn submit_while_in_flight_is_ignored() {
        let h = harness(Reply::Image { content_disposition: None });
        h.vm.select_file(png());
        h.vm.state().set_request_state(RequestState::InFlight);

        block_on(h.vm.submit());

        assert!(h.backend.calls.borrow().is_empty());
        assert!(h.notifier.seen.borrow().is_empty());
    }

    #[test]
    fn color_defaults_to_white_when_untouched() {
        let h = harness(Reply::Image { content_disposition: None });
        h.vm.select_file(png());

        block_on(h.vm.submit());

        assert_eq!(
            *h.backend.calls.borrow(),
            vec![("cat.png".to_string(), "#ffffff".to_string())]
        );
    }

    #[test]
    fn last_picked_color_is_sent() {
        let h = harness(Reply::Image { content_disposition: None });
        h.vm.select_file(png());
        h.vm.set_color("#FF0000");
        h.vm.set_color("#00ff7f");

        block_on(h.vm.submit());

        assert_eq!(h.backend.calls.borrow()[0].1, "#00ff7f");
    }

    #[test]
    fn clear_file_stops_propagation_and_drops_selection() {
        let h = harness(Reply::Image { content_disposition: None });
        h.vm.select_file(png());
        let click = FakeClick::default();

        h.vm.clear_file(&click);

        assert!(click.stopped.get());
        assert!(!h.vm.state().has_file());

        block_on(h.vm.submit());
        assert!(h.backend.calls.borrow().is_empty());
    }

    #[test]
    fn empty_drop_clears_previous_selection() {
        let h = harness(Reply::Image { content_disposition: None });
        h.vm.select_file(png());
        assert_eq!(h.vm.state().get_file_name().as_deref(), Some("cat.png"));

        h.vm.select_file(None);

        assert_eq!(h.vm.state().get_file_name(), None);
    }

    #[test]
    fn file_and_request_changes_trigger_full_render_color_does_not() {
        use crate::state::{IncrementalUpdate, UpdateType};

        let subscribers = Subscribers::new();
        let updates = Rc::new(RefCell::new(Vec::new()));
        let sink = updates.clone();
        subscribers.subscribe(move |u| sink.borrow_mut().push(u));

        let state: FormState<FakeFile> = FormState::new(subscribers);
        state.set_file(png());
        state.set_bg_color("#123456".to_string());
        state.set_request_state(RequestState::InFlight);

        assert_eq!(
            *updates.borrow(),
            vec![
                UpdateType::FullRender,
                UpdateType::Incremental(IncrementalUpdate::ColorPreview),
                UpdateType::FullRender,
            ]
        );
    }
}
