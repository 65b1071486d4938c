//! Network-backed [`StreamResolver`] for the CLI.
//!
//! With `--features lsl` (Windows/macOS) discovery goes through liblsl via the
//! `lsl` crate. Without it every discovery call fails with
//! [`MonitorError::DiscoveryUnavailable`], which `main` treats as fatal.

use lsl_stream_monitor::{MonitorConfig, StreamResolver};
#[cfg(not(all(feature = "lsl", not(target_os = "linux"))))]
use lsl_stream_monitor::{MonitorError, MonitorResult, StreamDescriptor};

/// Build the resolver for this binary.
///
/// `verbose` keeps liblsl's own stderr output visible even when the config
/// asks for it to be silenced.
pub fn network_resolver(config: &MonitorConfig, verbose: bool) -> Box<dyn StreamResolver> {
    #[cfg(all(feature = "lsl", not(target_os = "linux")))]
    {
        Box::new(lsl_backend::LslResolver {
            quiet: config.quiet_liblsl && !verbose,
        })
    }
    #[cfg(not(all(feature = "lsl", not(target_os = "linux"))))]
    {
        let _ = (config, verbose);
        Box::new(UnavailableResolver)
    }
}

/// Stand-in used when the binary was built without liblsl.
#[cfg(not(all(feature = "lsl", not(target_os = "linux"))))]
struct UnavailableResolver;

#[cfg(not(all(feature = "lsl", not(target_os = "linux"))))]
impl StreamResolver for UnavailableResolver {
    fn resolve_streams(&self, _wait_time: f64) -> MonitorResult<Vec<StreamDescriptor>> {
        tracing::error!("LSL discovery requested but liblsl support is not compiled in");
        Err(MonitorError::DiscoveryUnavailable {
            reason: "this build has no liblsl support; rebuild with `--features lsl` \
                     on Windows or macOS"
                .into(),
        })
    }
}

#[cfg(all(feature = "lsl", not(target_os = "linux")))]
mod lsl_backend {
    use lsl_stream_monitor::{MonitorError, MonitorResult, StreamDescriptor, StreamResolver};

    /// Resolves streams with `lsl::resolve_streams`.
    pub struct LslResolver {
        pub quiet: bool,
    }

    impl StreamResolver for LslResolver {
        fn resolve_streams(&self, wait_time: f64) -> MonitorResult<Vec<StreamDescriptor>> {
            let infos = {
                let _silenced = self.quiet.then(StderrSilencer::engage).flatten();
                lsl::resolve_streams(wait_time)
            }
            .map_err(|e| MonitorError::DiscoveryFailed {
                reason: format!("{e:?}"),
            })?;

            Ok(infos
                .iter()
                .map(|info| {
                    StreamDescriptor::new(
                        info.stream_name(),
                        info.stream_type(),
                        info.hostname(),
                        u32::try_from(info.channel_count()).unwrap_or(0),
                        info.nominal_srate(),
                        info.source_id(),
                    )
                })
                .collect())
        }
    }

    /// Points fd 2 at the null device until dropped.
    ///
    /// liblsl prints multicast bind failures for every virtual adapter
    /// (Hyper-V, VPN) straight to stderr from C; they are harmless noise.
    struct StderrSilencer {
        saved_fd: libc::c_int,
    }

    #[cfg(target_os = "windows")]
    const NULL_DEVICE: &[u8] = b"NUL\0";
    #[cfg(not(target_os = "windows"))]
    const NULL_DEVICE: &[u8] = b"/dev/null\0";

    impl StderrSilencer {
        #[allow(unsafe_code)]
        fn engage() -> Option<Self> {
            // SAFETY: plain POSIX fd calls on valid, NUL-terminated paths; every
            // descriptor opened here is either closed or restored in Drop.
            unsafe {
                let saved_fd = libc::dup(2);
                if saved_fd < 0 {
                    return None;
                }
                let null_fd = libc::open(NULL_DEVICE.as_ptr().cast(), libc::O_WRONLY);
                if null_fd < 0 {
                    libc::close(saved_fd);
                    return None;
                }
                let redirected = libc::dup2(null_fd, 2) >= 0;
                libc::close(null_fd);
                if !redirected {
                    libc::close(saved_fd);
                    return None;
                }
                Some(Self { saved_fd })
            }
        }
    }

    impl Drop for StderrSilencer {
        #[allow(unsafe_code)]
        fn drop(&mut self) {
            // SAFETY: saved_fd came from dup(2) in engage and is closed exactly once.
            unsafe {
                libc::dup2(self.saved_fd, 2);
                libc::close(self.saved_fd);
            }
        }
    }
}
