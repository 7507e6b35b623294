use crate::config::{EngineConfig, SlideTiming};
use crate::core::TimestampMs;
use crate::page::{Element, Page, selectors};

/// Delay before a hovered letter snaps back to `scaleY(1)`.
const HOVER_REVERT_MS: u64 = 300;
/// Delay before the slide-back of the `prev` transition completes.
const PREV_RESTORE_MS: u64 = 300;

/// Which page elements were found at startup.
///
/// Resolution happens once; a missing element logs a warning and leaves the
/// corresponding feature disabled instead of faulting later.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageBindings {
    pub interactive_text: bool,
    pub letter_count: usize,
    pub next_btn: bool,
    pub prev_btn: bool,
    pub next_text: bool,
    pub hidden_text: bool,
    pub wave_text: bool,
}

impl PageBindings {
    pub fn resolve(page: &Page) -> Self {
        let mut bindings = Self {
            interactive_text: page.contains(selectors::INTERACTIVE_TEXT),
            letter_count: page.letters().len(),
            next_btn: page.contains(selectors::NEXT_BTN),
            prev_btn: page.contains(selectors::PREV_BTN),
            next_text: page.contains(selectors::NEXT_TEXT),
            hidden_text: page.contains(selectors::HIDDEN_TEXT),
            wave_text: page.contains(selectors::WAVE_TEXT),
        };
        for (present, selector) in [
            (bindings.interactive_text, selectors::INTERACTIVE_TEXT),
            (bindings.next_btn, selectors::NEXT_BTN),
            (bindings.prev_btn, selectors::PREV_BTN),
            (bindings.next_text, selectors::NEXT_TEXT),
            (bindings.hidden_text, selectors::HIDDEN_TEXT),
            (bindings.wave_text, selectors::WAVE_TEXT),
        ] {
            if !present {
                tracing::warn!(selector, "page element missing; feature disabled");
            }
        }
        if bindings.letter_count == 0 {
            tracing::warn!("no interactive letters found; hover effect disabled");
        }
        // The slide needs the full element set.
        if !(bindings.interactive_text && bindings.next_text && bindings.next_btn) {
            bindings.interactive_text = false;
            bindings.next_text = false;
        }
        bindings
    }

    fn slide_available(&self) -> bool {
        self.interactive_text && self.next_text && self.next_btn
    }
}

/// A style mutation deferred to a later timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deferred {
    RevertLetter(usize),
    RevealPanel,
    RestorePanel,
}

/// Ordered deadline queue for the timed style mutations.
///
/// Single-threaded: the host calls [`TextFx::run_due`] from its frame loop and
/// every action whose deadline has passed is applied, in deadline order.
#[derive(Debug, Default)]
struct Scheduler {
    queue: Vec<(TimestampMs, Deferred)>,
}

impl Scheduler {
    fn schedule(&mut self, due: TimestampMs, action: Deferred) {
        self.queue.push((due, action));
        self.queue.sort_by_key(|(due, _)| *due);
    }

    fn drain_due(&mut self, now: TimestampMs) -> Vec<Deferred> {
        let split = self.queue.partition_point(|(due, _)| *due <= now);
        self.queue.drain(..split).map(|(_, a)| a).collect()
    }
}

/// The three page text effects: letter hover scaling, the two-panel slide
/// transition, and the per-letter wave animation.
pub struct TextFx {
    timing: SlideTiming,
    hover_scale_range: (f64, f64),
    bindings: PageBindings,
    visible: bool,
    scheduler: Scheduler,
    rng: fastrand::Rng,
}

impl TextFx {
    /// Resolve bindings against `page` and wire the effects up.
    pub fn new(config: &EngineConfig, page: &Page) -> Self {
        Self {
            timing: config.slide_style.timing(),
            hover_scale_range: config.hover_scale_range,
            bindings: PageBindings::resolve(page),
            visible: false,
            scheduler: Scheduler::default(),
            // Offset so the hover rolls differ from the engine's blob rolls.
            rng: fastrand::Rng::with_seed(config.seed ^ 0x7e97),
        }
    }

    pub fn bindings(&self) -> PageBindings {
        self.bindings
    }

    /// True once the slide transition has revealed the second panel.
    pub fn is_text_visible(&self) -> bool {
        self.visible
    }

    /// Wrap the title into per-letter spans with a staggered infinite wave.
    pub fn init_wave_text(&self, page: &mut Page) {
        if !self.bindings.wave_text {
            return;
        }
        let Some(title) = page.get_mut(selectors::WAVE_TEXT) else {
            return;
        };
        let text = std::mem::take(&mut title.text);
        title.children = text
            .chars()
            .enumerate()
            .map(|(index, letter)| {
                let mut span = Element::with_text(letter.to_string());
                span.style.display = Some("inline-block".to_owned());
                span.style.animation = Some("waveEffect 1s ease-in-out infinite".to_owned());
                span.style.animation_delay = Some(format!("{:.1}s", index as f64 * 0.1));
                span
            })
            .collect();
    }

    /// Pointer entered a letter: stretch it vertically by a random factor.
    pub fn hover_enter(&mut self, letter: usize, page: &mut Page) {
        let Some(el) = page.letter_mut(letter) else {
            return;
        };
        let (lo, hi) = self.hover_scale_range;
        let scale = lo + self.rng.f64() * (hi - lo);
        el.style.transform = Some(format!("scaleY({scale:.3})"));
    }

    /// Pointer left a letter: revert after a fixed delay.
    pub fn hover_leave(&mut self, letter: usize, now: TimestampMs) {
        self.scheduler.schedule(
            TimestampMs(now.0 + HOVER_REVERT_MS),
            Deferred::RevertLetter(letter),
        );
    }

    /// "Next" control: slide the letter block out and schedule the second
    /// panel's reveal. A second click while the panel is visible is a no-op.
    pub fn next(&mut self, now: TimestampMs, page: &mut Page) {
        if self.visible || !self.bindings.slide_available() {
            return;
        }

        if let Some(block) = page.get_mut(selectors::INTERACTIVE_TEXT) {
            block.style.transition = Some(format!(
                "transform {}s ease-in-out",
                self.timing.text_duration_s
            ));
            block.style.transform = Some(format!("translateX({}%)", self.timing.text_offset_pct));
        }
        if let Some(hidden) = page.get_mut(selectors::HIDDEN_TEXT) {
            hidden.add_class("show");
        }
        self.scheduler.schedule(
            TimestampMs(now.0 + self.timing.reveal_delay_ms),
            Deferred::RevealPanel,
        );
        self.visible = true;
    }

    /// "Prev" control: reverse of `next`, restoring the initial panel after a
    /// short delay. A click while nothing is revealed is a no-op.
    pub fn prev(&mut self, now: TimestampMs, page: &mut Page) {
        if !self.visible || !self.bindings.slide_available() {
            return;
        }

        if let Some(hidden) = page.get_mut(selectors::HIDDEN_TEXT) {
            hidden.remove_class("show");
        }
        if let Some(block) = page.get_mut(selectors::INTERACTIVE_TEXT) {
            block.style.transform = Some("translateX(0%)".to_owned());
        }
        self.scheduler.schedule(
            TimestampMs(now.0 + PREV_RESTORE_MS),
            Deferred::RestorePanel,
        );
        self.visible = false;
    }

    /// Apply every deferred mutation whose deadline has passed.
    pub fn run_due(&mut self, now: TimestampMs, page: &mut Page) {
        for action in self.scheduler.drain_due(now) {
            match action {
                Deferred::RevertLetter(letter) => {
                    if let Some(el) = page.letter_mut(letter) {
                        el.style.transform = Some("scaleY(1)".to_owned());
                    }
                }
                Deferred::RevealPanel => {
                    if let Some(panel) = page.get_mut(selectors::NEXT_TEXT) {
                        panel.style.transition = Some(format!(
                            "transform {}s ease, opacity {}s ease",
                            self.timing.panel_duration_s, self.timing.panel_fade_s
                        ));
                        panel.style.transform =
                            Some(format!("translateX({}%)", self.timing.panel_offset_pct));
                        panel.style.opacity = Some(1.0);
                    }
                    if let Some(btn) = page.get_mut(selectors::PREV_BTN) {
                        btn.style.opacity = Some(1.0);
                    }
                    if let Some(btn) = page.get_mut(selectors::NEXT_BTN) {
                        btn.style.opacity = Some(0.0);
                    }
                }
                Deferred::RestorePanel => {
                    if let Some(panel) = page.get_mut(selectors::NEXT_TEXT) {
                        panel.style.transform = Some("translateX(0%)".to_owned());
                        panel.style.opacity = Some(0.0);
                    }
                    if let Some(btn) = page.get_mut(selectors::PREV_BTN) {
                        btn.style.opacity = Some(0.0);
                    }
                    if let Some(btn) = page.get_mut(selectors::NEXT_BTN) {
                        btn.style.opacity = Some(1.0);
                    }
                }
            }
        }
    }
}
