//! Process signal handling shared by the HTTP services.

use tokio::signal;

/// Signal that asked the process to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate
}

impl ShutdownSignal {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM"
        }
    }
}

/// Waits for SIGINT (Ctrl+C) or SIGTERM and reports which one arrived.
///
/// If a handler cannot be installed the failure is logged and that signal
/// is ignored.
pub async fn wait_for_signal() -> ShutdownSignal {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => ShutdownSignal::Interrupt,
        () = terminate => ShutdownSignal::Terminate,
    }
}

/// Future for `axum::serve(..).with_graceful_shutdown`.
///
/// Logs the signal name once it arrives.
pub async fn shutdown_signal() {
    let received = wait_for_signal().await;
    tracing::info!(signal = received.name(), "Signal received, shutting down");
}
