//! Ephemeral toast notification queue.
//!
//! DESIGN
//! ======
//! The queue is a plain value model: pushing and dismissing never fail, and
//! unknown ids are ignored, so callers can notify unconditionally without
//! error handling. Timers live in the component layer (`ToastStack`); the
//! model only records each toast's lifecycle phase.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use uuid::Uuid;

/// How long a toast stays visible before auto-dismissal, in milliseconds.
pub const DWELL_MS: u32 = 6_000;

/// How long the leave animation runs before the toast is dropped.
pub const EXIT_MS: u32 = 300;

/// Severity of a toast, controlling its title and styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Heading shown above the toast message.
    pub fn title(self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Success => "Success",
            Severity::Error => "Error",
        }
    }

    /// CSS class modifier for the toast container.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// Lifecycle phase of a single toast.
///
/// `Leaving` is entered at most once; the toast is removed outright when the
/// exit animation completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    #[default]
    Visible,
    Leaving,
}

/// One on-screen notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Unique toast identifier.
    pub id: Uuid,
    /// Message body shown to the user.
    pub message: String,
    /// Severity controlling title and styling.
    pub severity: Severity,
    /// Current lifecycle phase.
    pub phase: ToastPhase,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_ms: f64,
}

/// Ordered collection of live toasts; each expires on its own timer.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Append a new visible toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            phase: ToastPhase::Visible,
            created_ms: now_ms(),
        });
        id
    }

    /// Move a toast into the `Leaving` phase.
    ///
    /// Returns `true` only on the first call for a visible toast, so the
    /// caller can schedule exactly one removal. Unknown ids and toasts
    /// already leaving return `false`.
    pub fn begin_dismiss(&mut self, id: Uuid) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase == ToastPhase::Visible => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Drop a toast outright. Unknown ids are a no-op.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Live toasts in creation order.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64() * 1000.0)
    }
}
