//! CLI commands

pub mod create;
pub mod guide;
pub mod jupyter;
pub mod setup;
pub mod shortcuts;
pub mod templates;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing {
    //! Fake command runner for command tests

    use colab_bridge::runner::{CommandRunner, Invocation, RunError};
    use std::cell::RefCell;

    /// Records every invocation; programs or packages listed in `failing`
    /// exit non-zero, and `missing` makes every program unavailable.
    #[derive(Debug, Default)]
    pub struct RecordingRunner {
        pub calls: RefCell<Vec<Invocation>>,
        pub spawned: RefCell<Vec<Invocation>>,
        pub failing: Vec<String>,
        pub missing: bool,
    }

    impl RecordingRunner {
        pub fn failing<I: IntoIterator<Item = &'static str>>(names: I) -> Self {
            Self {
                failing: names.into_iter().map(String::from).collect(),
                ..Default::default()
            }
        }

        pub fn missing() -> Self {
            Self {
                missing: true,
                ..Default::default()
            }
        }

        fn check(&self, invocation: &Invocation) -> Result<(), RunError> {
            if self.missing {
                return Err(RunError::NotFound {
                    program: invocation.program.clone(),
                });
            }
            if invocation.args.iter().any(|a| self.failing.contains(a)) {
                return Err(RunError::Failed {
                    invocation: invocation.to_string(),
                    code: Some(1),
                    stderr: "ERROR: No matching distribution found".to_string(),
                });
            }
            Ok(())
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, invocation: &Invocation) -> Result<(), RunError> {
            self.calls.borrow_mut().push(invocation.clone());
            self.check(invocation)
        }

        fn spawn_detached(&self, invocation: &Invocation) -> Result<u32, RunError> {
            self.spawned.borrow_mut().push(invocation.clone());
            self.check(invocation).map(|_| 4242)
        }
    }
}
