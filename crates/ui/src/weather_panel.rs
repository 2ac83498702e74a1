//! Weather control panel.
//!
//! Provides an egui window with:
//! - Environment and time-of-day selectors (each with an "unset" choice)
//! - Which source produced the live settings, and the live generation id
//! - Config feed state, stream counters, the last accepted payload and the
//!   last rejection
//! - Keybinds: 1-4 environment, Q/W/E/R time of day, F1 toggles the panel

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::frame_driver::FrameDriver;
use simulation::config_stream::{ConfigInbox, ConfigStreamStatus};
use simulation::generation::SceneGeneration;
use simulation::scene_state::ActiveSettings;
use simulation::selection::WeatherSelection;
use simulation::weather_state::{Environment, TimeOfDay};

// =============================================================================
// Resources
// =============================================================================

/// Whether the weather panel is visible.
#[derive(Resource)]
pub struct WeatherPanelVisible(pub bool);

impl Default for WeatherPanelVisible {
    fn default() -> Self {
        Self(true)
    }
}

// =============================================================================
// Systems
// =============================================================================

pub fn weather_panel_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<WeatherPanelVisible>,
    mut selection: ResMut<WeatherSelection>,
    active: Res<ActiveSettings>,
    generation: Res<SceneGeneration>,
    stream: Res<ConfigStreamStatus>,
    inbox: Res<ConfigInbox>,
    driver: Res<FrameDriver>,
) {
    if !visible.0 {
        return;
    }

    let mut environment = selection.environment;
    let mut time = selection.time;
    let mut open = true;
    egui::Window::new("Weather")
        .open(&mut open)
        .resizable(false)
        .default_width(240.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;

            ui.label("Environment:");
            ui.horizontal_wrapped(|ui| {
                for choice in std::iter::once(None).chain(Environment::ALL.map(Some)) {
                    ui.selectable_value(&mut environment, choice, environment_label(choice));
                }
            });

            ui.label("Time of Day:");
            ui.horizontal_wrapped(|ui| {
                for choice in std::iter::once(None).chain(TimeOfDay::ALL.map(Some)) {
                    ui.selectable_value(&mut time, choice, time_label(choice));
                }
            });

            ui.separator();

            ui.label(format!(
                "Scene #{} from {} ({:?})",
                generation.current(),
                active.source.name(),
                driver.state()
            ));
            let s = &active.settings;
            ui.label(format!(
                "{} particles, {} clouds{}",
                s.precipitation_count,
                s.cloud_count,
                if s.bloom { ", bloom" } else { "" }
            ));

            ui.separator();

            ui.label(format!(
                "Feed {}: {} accepted, {} rejected",
                feed_label(inbox.is_connected()),
                stream.accepted,
                stream.rejected
            ));
            if let Some(last) = &stream.last_accepted {
                ui.label(egui::RichText::new(last).monospace().small());
            }
            if let Some(err) = &stream.last_error {
                ui.colored_label(egui::Color32::from_rgb(230, 120, 100), err);
            }
        });

    selection.set_if_neq(WeatherSelection { environment, time });

    if !open {
        visible.0 = false;
    }
}

pub fn weather_keybinds(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut selection: ResMut<WeatherSelection>,
    mut visible: ResMut<WeatherPanelVisible>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keyboard.just_pressed(KeyCode::F1) {
        visible.0 = !visible.0;
    }
    let next = selection_after_keys(&keyboard, &selection);
    selection.set_if_neq(next);
}

/// The selection after this frame's shortcut presses.
pub fn selection_after_keys(
    keyboard: &ButtonInput<KeyCode>,
    current: &WeatherSelection,
) -> WeatherSelection {
    let mut next = *current;
    for key in keyboard.get_just_pressed() {
        if let Some(environment) = environment_for_key(*key) {
            next.environment = Some(environment);
        }
        if let Some(time) = time_for_key(*key) {
            next.time = Some(time);
        }
    }
    next
}

fn environment_for_key(key: KeyCode) -> Option<Environment> {
    match key {
        KeyCode::Digit1 => Some(Environment::Clear),
        KeyCode::Digit2 => Some(Environment::Cloudy),
        KeyCode::Digit3 => Some(Environment::Rainy),
        KeyCode::Digit4 => Some(Environment::Snowy),
        _ => None,
    }
}

fn time_for_key(key: KeyCode) -> Option<TimeOfDay> {
    match key {
        KeyCode::KeyQ => Some(TimeOfDay::Morning),
        KeyCode::KeyW => Some(TimeOfDay::Afternoon),
        KeyCode::KeyE => Some(TimeOfDay::Evening),
        KeyCode::KeyR => Some(TimeOfDay::Night),
        _ => None,
    }
}

fn environment_label(environment: Option<Environment>) -> &'static str {
    environment.map_or("Unset", Environment::name)
}

fn time_label(time: Option<TimeOfDay>) -> &'static str {
    time.map_or("Unset", TimeOfDay::name)
}

fn feed_label(connected: bool) -> &'static str {
    if connected {
        "open"
    } else {
        "closed"
    }
}
