//! Transient notifications
//!
//! Async tasks push toasts through a cloned handle; the app draws them
//! anchored to the top-right corner and drops them after a few seconds.

use std::sync::Arc;
use std::time::{Duration, Instant};

use egui::{Align2, Color32, Context, RichText};
use parking_lot::RwLock;

use crate::theme;

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

pub struct Toast {
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
    created: Instant,
}

#[derive(Clone, Default)]
pub struct Toasts {
    queue: Arc<RwLock<Vec<Toast>>>,
}

impl Toasts {
    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastKind::Info, title, message);
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastKind::Error, title, message);
    }

    fn push(&self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) {
        self.queue.write().push(Toast {
            title: title.into(),
            message: message.into(),
            kind,
            created: Instant::now(),
        });
    }

    /// Draw pending toasts and expire stale ones.
    pub fn show(&self, ctx: &Context) {
        let now = Instant::now();
        let mut queue = self.queue.write();
        queue.retain(|toast| now.duration_since(toast.created) < TOAST_TTL);
        if queue.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("pw_toasts"))
            .anchor(Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in queue.iter() {
                    let accent = match toast.kind {
                        ToastKind::Info => theme::success_color(),
                        ToastKind::Error => theme::error_color(),
                    };
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_max_width(280.0);
                        ui.label(RichText::new(&toast.title).strong().color(accent));
                        ui.label(RichText::new(&toast.message).color(Color32::from_gray(200)));
                    });
                    ui.add_space(6.0);
                }
            });

        // Wake up again so expiry happens without user input.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
