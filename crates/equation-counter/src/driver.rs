//! Unified widget driver
//!
//! **Write the test logic once, run it on every frontend.** Each frontend
//! implements [`CounterDriver`] by performing real interactions and reading
//! back what it actually displays, so the shared `verify_*` functions check
//! the rendered surface and not just the core state.

use crate::core::{CounterResult, Slot, Snapshot};

/// Abstract driver trait for widget interactions
///
/// # Example
///
/// ```rust,ignore
/// fn verify_single_click<D: CounterDriver>(driver: &mut D) {
///     driver.click(Slot::Left).unwrap();
///     assert_eq!(driver.displayed().unwrap().total, 1);
/// }
/// ```
pub trait CounterDriver {
    /// Activates a counter the way a user would
    fn click(&mut self, slot: Slot) -> CounterResult<u64>;

    /// Reads the three values back from the rendered surface
    ///
    /// `None` when the surface does not show three parseable numbers.
    fn displayed(&self) -> Option<Snapshot>;

    /// Returns the widget to its initial state
    fn reset(&mut self);
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use ratatui::{backend::TestBackend, Terminal};

    use super::{CounterDriver, CounterResult, Slot, Snapshot};
    use crate::tui::{read_value, render, EquationApp, EquationLayout};

    /// Default off-screen terminal size
    const WIDTH: u16 = 80;
    const HEIGHT: u16 = 12;

    /// Drives an [`EquationApp`] rendered into an off-screen terminal
    #[derive(Debug)]
    pub struct TuiDriver {
        app: EquationApp,
        terminal: Terminal<TestBackend>,
        layout: Option<EquationLayout>,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::with_app(EquationApp::new())
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: EquationApp) -> Self {
            let terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT))
                .expect("test backend never fails to initialise");
            let mut driver = Self {
                app,
                terminal,
                layout: None,
            };
            driver.redraw();
            driver
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &EquationApp {
            &self.app
        }

        /// Returns the layout of the last frame
        #[must_use]
        pub fn layout(&self) -> Option<EquationLayout> {
            self.layout
        }

        /// Returns the terminal holding the last frame
        #[must_use]
        pub fn terminal(&self) -> &Terminal<TestBackend> {
            &self.terminal
        }

        fn redraw(&mut self) {
            let app = &self.app;
            let mut layout = None;
            match self.terminal.draw(|frame| layout = Some(render(app, frame))) {
                Ok(_) => self.layout = layout,
                Err(e) => {
                    tracing::warn!(error = %e, "off-screen draw failed");
                    self.layout = None;
                }
            }
        }
    }

    impl CounterDriver for TuiDriver {
        fn click(&mut self, slot: Slot) -> CounterResult<u64> {
            let result = self.app.click(slot);
            self.redraw();
            result
        }

        fn displayed(&self) -> Option<Snapshot> {
            let layout = self.layout?;
            let buf = self.terminal.backend().buffer();
            Some(Snapshot {
                left: read_value(buf, layout.left)?,
                middle: read_value(buf, layout.middle)?,
                total: read_value(buf, layout.total)?,
            })
        }

        fn reset(&mut self) {
            self.app.reset();
            self.redraw();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Test Specifications =====
// These work with ANY CounterDriver implementation

/// Reads the displayed values, panicking if the surface is unreadable
fn observe<D: CounterDriver>(driver: &D) -> Snapshot {
    driver
        .displayed()
        .expect("frontend should display three numbers")
}

/// Verifies the initial state is `0 + 0 = 0`
pub fn verify_initial_state<D: CounterDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(observe(driver), Snapshot::default());
}

/// Verifies that `n` left clicks and `m` middle clicks show `n`, `m`, `n + m`
pub fn verify_independent_counters<D: CounterDriver>(driver: &mut D, n: u64, m: u64) {
    driver.reset();
    for _ in 0..n {
        driver.click(Slot::Left).unwrap();
    }
    for _ in 0..m {
        driver.click(Slot::Middle).unwrap();
    }
    assert_eq!(
        observe(driver),
        Snapshot {
            left: n,
            middle: m,
            total: n + m,
        }
    );
}

/// Verifies the total equals the sum after every click of a sequence
pub fn verify_total_invariant<D: CounterDriver>(driver: &mut D, clicks: &[Slot]) {
    driver.reset();
    for slot in clicks {
        driver.click(*slot).unwrap();
        let snap = observe(driver);
        assert!(snap.is_consistent(), "inconsistent display: {snap}");
    }
}

/// Verifies the worked example: left twice, middle three times -> 2, 3, 5
pub fn verify_documented_example<D: CounterDriver>(driver: &mut D) {
    driver.reset();
    driver.click(Slot::Left).unwrap();
    driver.click(Slot::Left).unwrap();
    driver.click(Slot::Middle).unwrap();
    driver.click(Slot::Middle).unwrap();
    driver.click(Slot::Middle).unwrap();

    let snap = observe(driver);
    assert_eq!((snap.left, snap.middle, snap.total), (2, 3, 5));
}

/// Verifies that interleaved clicks are attributed to the right counter
pub fn verify_interleaving<D: CounterDriver>(driver: &mut D) {
    driver.reset();
    for slot in [Slot::Middle, Slot::Left, Slot::Middle, Slot::Left, Slot::Left] {
        driver.click(slot).unwrap();
    }
    assert_eq!(observe(driver).to_string(), "3 + 2 = 5");
}

/// Complete verification suite - runs all specifications
pub fn run_full_specification<D: CounterDriver>(driver: &mut D) {
    verify_initial_state(driver);
    verify_independent_counters(driver, 4, 7);
    verify_independent_counters(driver, 0, 3);
    verify_total_invariant(
        driver,
        &[Slot::Left, Slot::Middle, Slot::Middle, Slot::Left],
    );
    verify_documented_example(driver);
    verify_interleaving(driver);
}
