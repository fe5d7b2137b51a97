//! Runs conversions off the UI thread.

use super::state::ConversionRequest;
use crate::ui_egui::backend::{Backend, BackendError};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

pub type SharedBackend = Arc<dyn Backend + Send + Sync>;

type ConversionResult = Result<String, BackendError>;

/// At most one conversion in flight; results are picked up by polling.
#[derive(Default)]
pub struct ConversionWorker {
    result_rx: Option<Receiver<ConversionResult>>,
}

impl ConversionWorker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.result_rx.is_some()
    }

    /// Start a conversion on a background thread.
    ///
    /// Returns `false` without starting anything while another conversion is
    /// still running.
    pub fn start(&mut self, backend: SharedBackend, request: ConversionRequest) -> bool {
        if self.is_busy() {
            log::warn!("Ignoring convert request while a conversion is running");
            return false;
        }

        let (tx, rx) = mpsc::channel();
        self.result_rx = Some(rx);

        thread::spawn(move || {
            let result =
                backend.convert_excel_to_ical(&request.input_path, &request.output_path);
            let _ = tx.send(result);
        });

        true
    }

    /// Poll for a finished conversion.
    ///
    /// Should be called once per frame.
    pub fn poll(&mut self) -> Option<ConversionResult> {
        let rx = self.result_rx.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.result_rx = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.result_rx = None;
                log::error!("Conversion worker exited without reporting a result");
                Some(Err(BackendError::new(
                    "conversion stopped unexpectedly",
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::time::{Duration, Instant};

    struct GatedBackend {
        gate: Barrier,
    }

    impl Backend for GatedBackend {
        fn select_file(&self) -> String {
            String::new()
        }

        fn save_file(&self) -> String {
            String::new()
        }

        fn convert_excel_to_ical(&self, input: &str, _output: &str) -> Result<String, BackendError> {
            self.gate.wait();
            if input == "bad.xlsx" {
                Err(BackendError::new("bad file"))
            } else {
                Ok("Done".to_string())
            }
        }
    }

    struct PanickingBackend;

    impl Backend for PanickingBackend {
        fn select_file(&self) -> String {
            String::new()
        }

        fn save_file(&self) -> String {
            String::new()
        }

        fn convert_excel_to_ical(&self, _: &str, _: &str) -> Result<String, BackendError> {
            panic!("backend crashed");
        }
    }

    fn request(input: &str) -> ConversionRequest {
        ConversionRequest {
            input_path: input.to_string(),
            output_path: "out.ics".to_string(),
        }
    }

    fn wait_for_result(worker: &mut ConversionWorker) -> ConversionResult {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = worker.poll() {
                return result;
            }
            assert!(Instant::now() < deadline, "worker did not finish");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_single_conversion_in_flight() {
        let backend = Arc::new(GatedBackend {
            gate: Barrier::new(2),
        });
        let mut worker = ConversionWorker::new();

        assert!(worker.start(backend.clone(), request("in.xlsx")));
        assert!(worker.is_busy());
        assert!(!worker.start(backend.clone(), request("other.xlsx")));
        assert_eq!(worker.poll(), None);

        backend.gate.wait();
        assert_eq!(wait_for_result(&mut worker), Ok("Done".to_string()));
        assert!(!worker.is_busy());
    }

    #[test]
    fn test_failure_is_reported() {
        let backend = Arc::new(GatedBackend {
            gate: Barrier::new(1),
        });
        let mut worker = ConversionWorker::new();

        worker.start(backend, request("bad.xlsx"));
        assert_eq!(
            wait_for_result(&mut worker),
            Err(BackendError::new("bad file"))
        );
    }

    #[test]
    fn test_crashed_worker_is_reported() {
        let mut worker = ConversionWorker::new();
        worker.start(Arc::new(PanickingBackend), request("in.xlsx"));

        let result = wait_for_result(&mut worker);
        assert_eq!(
            result,
            Err(BackendError::new("conversion stopped unexpectedly"))
        );
        assert!(!worker.is_busy());
    }

    #[test]
    fn test_idle_poll() {
        let mut worker = ConversionWorker::new();
        assert_eq!(worker.poll(), None);
    }
}
