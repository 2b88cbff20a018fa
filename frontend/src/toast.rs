use std::rc::Rc;
use yew::functional::Reducible;

/// Auto-hide delay for a visible toast, in milliseconds.
pub const AUTO_HIDE_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HideReason {
    CloseButton,
    TimedOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastAction {
    Show,
    Dismiss(HideReason),
    /// Timer fired for the toast shown with this generation.
    Expire(u64),
}

/// Two-state toast: hidden, or visible under a generation number.
///
/// Each `Show` takes a new generation, so a timer armed for an earlier showing
/// can never hide a later one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    visible: bool,
    generation: u64,
    last_hidden_by: Option<HideReason>,
}

impl ToastState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    pub fn last_hidden_by(&self) -> Option<HideReason> {
        self.last_hidden_by
    }

    /// The timer the view must have armed: `(generation, delay_ms)` while visible.
    pub fn pending_expiry(&self) -> Option<(u64, u32)> {
        self.visible.then_some((self.generation, AUTO_HIDE_MS))
    }

    /// Applies `action`, returning whether the state changed.
    pub fn apply(&mut self, action: ToastAction) -> bool {
        match action {
            ToastAction::Show => {
                self.visible = true;
                self.generation += 1;
                true
            }
            ToastAction::Dismiss(reason) => self.hide(reason),
            ToastAction::Expire(generation) if generation == self.generation => {
                self.hide(HideReason::TimedOut)
            }
            ToastAction::Expire(_) => false,
        }
    }

    fn hide(&mut self, reason: HideReason) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        self.last_hidden_by = Some(reason);
        true
    }
}

/// Schedules the expiry for `pending` through `schedule(delay_ms, action)`.
///
/// The view keeps the returned handle until the pending expiry changes; dropping
/// it must cancel the timer.
pub fn arm_expiry<T>(
    pending: Option<(u64, u32)>,
    schedule: impl FnOnce(u32, ToastAction) -> T,
) -> Option<T> {
    pending.map(|(generation, delay_ms)| schedule(delay_ms, ToastAction::Expire(generation)))
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}
