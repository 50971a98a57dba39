//! DOM-free state machine behind a download button.
//!
//! The controller feeds it activations, probe outcomes and timer ticks and
//! applies whatever [`Appearance`] it hands back.

use crate::config::DownloadConfig;
use crate::download::probe::ProbeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Absent,
    Placeholder,
    Url(String),
}

impl Target {
    /// Classifies the raw `href` attribute of a control.
    pub fn from_href(href: Option<&str>) -> Self {
        match href.map(str::trim) {
            None => Target::Absent,
            Some("") | Some("#") => Target::Placeholder,
            Some(url) => Target::Url(url.to_string()),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Target::Url(url) => Some(url),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    Probing { started_at: f64 },
    Success,
    FailureFallback,
}

/// CSS class carried by the control in a given phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    None,
    Busy,
    Success,
}

impl Indicator {
    pub const BUSY_CLASS: &'static str = "downloading";
    pub const SUCCESS_CLASS: &'static str = "success";

    pub fn class(self) -> Option<&'static str> {
        match self {
            Indicator::None => None,
            Indicator::Busy => Some(Self::BUSY_CLASS),
            Indicator::Success => Some(Self::SUCCESS_CLASS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub indicator: Indicator,
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoTarget,
    InFlight,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    Ignored(IgnoreReason),
    Probe { url: String, appearance: Appearance },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// Show the success face, then call [`DownloadAction::revert`] after
    /// `revert_after_ms`.
    Celebrate {
        appearance: Appearance,
        revert_after_ms: u32,
    },
    /// Already back to idle; restore this face.
    Fallback { appearance: Appearance },
}

pub struct DownloadAction {
    target: Target,
    phase: Phase,
    original_icon: String,
    original_text: String,
    prefetched: bool,
    labels: DownloadConfig,
}

impl DownloadAction {
    pub fn new(target: Target, original_icon: String, original_text: String, labels: DownloadConfig) -> Self {
        Self {
            target,
            phase: Phase::Idle,
            original_icon,
            original_text,
            prefetched: false,
            labels,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn original(&self) -> Appearance {
        Appearance {
            indicator: Indicator::None,
            icon: self.original_icon.clone(),
            text: self.original_text.clone(),
        }
    }

    /// Idle → Probing. Controls without a usable target never leave Idle,
    /// and a control that is already busy ignores further activations.
    pub fn activate(&mut self, now_ms: f64) -> Activation {
        let Some(url) = self.target.url() else {
            return Activation::Ignored(IgnoreReason::NoTarget);
        };
        if self.phase != Phase::Idle {
            return Activation::Ignored(IgnoreReason::InFlight);
        }
        let url = url.to_string();
        self.phase = Phase::Probing { started_at: now_ms };
        Activation::Probe {
            url,
            appearance: Appearance {
                indicator: Indicator::Busy,
                icon: self.labels.busy_icon.clone(),
                text: self.original_text.clone(),
            },
        }
    }

    /// How much longer the busy face must stay up before settling.
    pub fn hold_remaining(&self, now_ms: f64) -> u32 {
        match self.phase {
            Phase::Probing { started_at } => {
                let elapsed = (now_ms - started_at).max(0.0);
                let remaining = f64::from(self.labels.min_busy_ms) - elapsed;
                if remaining > 0.0 {
                    remaining.ceil() as u32
                } else {
                    0
                }
            }
            _ => 0,
        }
    }

    /// Probing → Success, or Probing → FailureFallback → Idle. Returns
    /// `None` when there is no probe in flight.
    pub fn settle(&mut self, outcome: &Result<(), ProbeError>) -> Option<Settlement> {
        if !matches!(self.phase, Phase::Probing { .. }) {
            return None;
        }
        match outcome {
            Ok(()) => {
                self.phase = Phase::Success;
                Some(Settlement::Celebrate {
                    appearance: Appearance {
                        indicator: Indicator::Success,
                        icon: self.labels.success_icon.clone(),
                        text: self.labels.success_text.clone(),
                    },
                    revert_after_ms: self.labels.success_hold_ms,
                })
            }
            Err(_) => {
                self.phase = Phase::FailureFallback;
                let appearance = self.original();
                self.phase = Phase::Idle;
                Some(Settlement::Fallback { appearance })
            }
        }
    }

    /// Success → Idle.
    pub fn revert(&mut self) -> Option<Appearance> {
        if self.phase != Phase::Success {
            return None;
        }
        self.phase = Phase::Idle;
        Some(self.original())
    }

    /// Returns the URL to prefetch the first time a usable control is
    /// hovered, and `None` ever after.
    pub fn hover(&mut self) -> Option<&str> {
        if self.prefetched {
            return None;
        }
        let url = self.target.url()?;
        self.prefetched = true;
        Some(url)
    }

    /// For controls already hinted by an earlier initialization.
    pub fn mark_prefetched(&mut self) {
        self.prefetched = true;
    }

    pub fn prefetched(&self) -> bool {
        self.prefetched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(href: Option<&str>) -> DownloadAction {
        DownloadAction::new(
            Target::from_href(href),
            "⬇".to_string(),
            "Download for Linux".to_string(),
            DownloadConfig::default(),
        )
    }

    fn unreachable() -> Result<(), ProbeError> {
        Err(ProbeError::Unreachable { status: 404 })
    }

    #[test]
    fn classifies_targets() {
        assert_eq!(Target::from_href(None), Target::Absent);
        assert_eq!(Target::from_href(Some("#")), Target::Placeholder);
        assert_eq!(Target::from_href(Some("  ")), Target::Placeholder);
        assert_eq!(
            Target::from_href(Some("/files/app.deb")),
            Target::Url("/files/app.deb".to_string())
        );
    }

    #[test]
    fn activation_enters_probing_synchronously() {
        let mut action = action(Some("/files/app.deb"));
        match action.activate(1_000.0) {
            Activation::Probe { url, appearance } => {
                assert_eq!(url, "/files/app.deb");
                assert_eq!(appearance.indicator, Indicator::Busy);
                assert_eq!(appearance.icon, "⏳");
                assert_eq!(appearance.text, "Download for Linux");
            }
            other => panic!("expected a probe, got {:?}", other),
        }
        assert_eq!(action.phase(), Phase::Probing { started_at: 1_000.0 });
    }

    #[test]
    fn placeholder_and_absent_targets_never_probe() {
        for href in [None, Some("#"), Some("")] {
            let mut action = action(href);
            assert_eq!(
                action.activate(0.0),
                Activation::Ignored(IgnoreReason::NoTarget)
            );
            assert_eq!(action.phase(), Phase::Idle);
            assert_eq!(action.settle(&Ok(())), None);
        }
    }

    #[test]
    fn busy_face_is_held_even_for_an_instant_answer() {
        let mut action = action(Some("/files/app.deb"));
        action.activate(5_000.0);
        assert_eq!(action.hold_remaining(5_000.0), 300);
        assert_eq!(action.hold_remaining(5_120.5), 180);
        assert_eq!(action.hold_remaining(5_300.0), 0);
        assert_eq!(action.hold_remaining(9_000.0), 0);
    }

    #[test]
    fn success_reverts_after_the_hold_window() {
        let mut action = action(Some("/files/app.deb"));
        action.activate(0.0);

        let settlement = action.settle(&Ok(())).unwrap();
        assert_eq!(
            settlement,
            Settlement::Celebrate {
                appearance: Appearance {
                    indicator: Indicator::Success,
                    icon: "✓".to_string(),
                    text: "Downloaded!".to_string(),
                },
                revert_after_ms: 2000,
            }
        );
        assert_eq!(action.phase(), Phase::Success);

        assert_eq!(action.revert(), Some(action.original()));
        assert_eq!(action.phase(), Phase::Idle);
        assert_eq!(action.revert(), None);
    }

    #[test]
    fn cycles_repeat_identically() {
        let mut action = action(Some("/files/app.deb"));
        let mut faces = Vec::new();
        for round in 0..3 {
            let start = f64::from(round) * 10_000.0;
            let Activation::Probe { appearance, .. } = action.activate(start) else {
                panic!("round {} did not probe", round);
            };
            let settled = action.settle(&Ok(())).unwrap();
            let reverted = action.revert().unwrap();
            faces.push((appearance, settled, reverted));
        }
        assert!(faces.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn failure_restores_the_original_face_at_once() {
        let mut action = action(Some("/files/app.deb"));
        action.activate(0.0);

        let settlement = action.settle(&unreachable()).unwrap();
        assert_eq!(
            settlement,
            Settlement::Fallback {
                appearance: Appearance {
                    indicator: Indicator::None,
                    icon: "⬇".to_string(),
                    text: "Download for Linux".to_string(),
                },
            }
        );
        assert_eq!(action.phase(), Phase::Idle);
        assert_eq!(action.revert(), None);
    }

    #[test]
    fn transport_failure_is_treated_like_a_missing_file() {
        let mut a = action(Some("/files/app.deb"));
        let mut b = action(Some("/files/app.deb"));
        a.activate(0.0);
        b.activate(0.0);
        let failed = Err(ProbeError::Failed("network down".to_string()));
        assert_eq!(a.settle(&failed), b.settle(&unreachable()));
    }

    #[test]
    fn reactivation_while_busy_is_ignored() {
        let mut action = action(Some("/files/app.deb"));
        action.activate(0.0);
        assert_eq!(
            action.activate(50.0),
            Activation::Ignored(IgnoreReason::InFlight)
        );
        assert_eq!(action.phase(), Phase::Probing { started_at: 0.0 });

        action.settle(&Ok(())).unwrap();
        assert_eq!(
            action.activate(400.0),
            Activation::Ignored(IgnoreReason::InFlight)
        );
    }

    #[test]
    fn hover_prefetches_once() {
        let mut action = action(Some("/files/app.deb"));
        assert_eq!(action.hover(), Some("/files/app.deb"));
        assert_eq!(action.hover(), None);
        assert!(action.prefetched());
    }

    #[test]
    fn already_hinted_controls_skip_prefetch() {
        let mut action = action(Some("/files/app.deb"));
        action.mark_prefetched();
        assert_eq!(action.hover(), None);
    }

    #[test]
    fn hover_without_target_does_not_arm() {
        let mut action = action(Some("#"));
        assert_eq!(action.hover(), None);
        assert!(!action.prefetched());
    }
}
