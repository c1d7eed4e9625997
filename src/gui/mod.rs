use crate::APP_STATE;
use state::LOGIN_PATH;
use std::sync::PoisonError;
use std::time::Duration;

pub mod state;

pub fn ui_main(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());

    let mut state = APP_STATE.lock().unwrap_or_else(PoisonError::into_inner);
    // Check in-flight work before draining: a task that finishes in between
    // has already queued its event, so the drain below still sees it.
    let waiting = state.is_waiting();
    let drained = state.process_events();

    // Completions arrive off the UI thread; keep polling until they land.
    if waiting || drained {
        ctx.request_repaint_after(Duration::from_millis(100));
    }

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        egui::Frame::default()
            .outer_margin(egui::vec2(0.0, 4.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                        ui.heading(if state.on_dashboard() {
                            "Dashboard"
                        } else {
                            "Login"
                        });
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if state.on_dashboard() && ui.button("Back to login").clicked() {
                            state.navigate(LOGIN_PATH);
                        }
                    });
                });
            });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        if state.on_dashboard() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.heading("Welcome");
                ui.label("You are logged in.");
            });
            return;
        }

        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading("Login with OTP");
            ui.add_space(12.0);

            if state.page.alert_visible {
                egui::Frame::default()
                    .fill(egui::Color32::from_rgb(248, 215, 218))
                    .inner_margin(egui::vec2(8.0, 6.0))
                    .show(ui, |ui| {
                        ui.colored_label(
                            egui::Color32::from_rgb(114, 28, 36),
                            &state.page.alert_message,
                        );
                    });
                ui.add_space(8.0);
            }

            egui::Grid::new("otp_login_grid")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Username:");
                    ui.text_edit_singleline(&mut state.page.username);
                    ui.end_row();

                    ui.label("Passcode:");
                    ui.add(egui::TextEdit::singleline(&mut state.page.passcode).password(true));
                    ui.end_row();
                });

            ui.add_space(12.0);
            if ui.button("Login").clicked() {
                state.submit_login();
            }
        });
    });

    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Server: {}", state.server_url));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(&state.status_message);
            });
        });
    });
}
