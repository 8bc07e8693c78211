/*  Passgen - a simple password generator
    Copyright (C) 2019 Joakim Lundborg, Alexander Kjäll

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::path::PathBuf;
use std::process;

use cursive::event::{Event, Key};
use cursive::theme::ColorStyle;
use cursive::traits::*;
use cursive::utils::markup::StyledString;
use cursive::views::{Button, Checkbox, Dialog, LinearLayout, SliderView, TextView};
use cursive::Cursive;

use log::error;
use passgen::clipboard::SystemClipboard;
use passgen::options::{CharacterClass, Options, CHARACTER_CLASSES, MAX_LENGTH, MIN_LENGTH};
use passgen::settings::{options_from_config, read_config, save_config};
use passgen::strength::STRENGTH_LEVELS;
use passgen::widget::{Notification, PasswordWidget};

mod helpers;

/// One slider cell per selectable length.
const SLIDER_WIDTH: usize = MAX_LENGTH - MIN_LENGTH + 1;
/// Borders and padding the dialog adds around its content.
const DIALOG_CHROME: usize = 4;
const DIALOG_WIDTH: usize = SLIDER_WIDTH + DIALOG_CHROME;

fn checkbox_name(class: CharacterClass) -> String {
    format!("include_{}", class.key())
}

/// What the screen shows of the widget, taken out of the user data so the views can be updated
/// without holding a borrow on it.
struct Snapshot {
    options: Options,
    password: String,
    is_copied: bool,
    label: &'static str,
    meter: [bool; 4],
}

fn snapshot(ui: &mut Cursive) -> Option<Snapshot> {
    ui.with_user_data(|w: &mut PasswordWidget| Snapshot {
        options: *w.options(),
        password: w.password().to_owned(),
        is_copied: w.is_copied(),
        label: w.strength().label,
        meter: w.meter(),
    })
}

fn render_meter(meter: &[bool; 4]) -> StyledString {
    let mut s = StyledString::new();
    for (lit, level) in meter.iter().zip(STRENGTH_LEVELS.iter()) {
        if *lit {
            s.append_styled("█ ", ColorStyle::front(helpers::color(level.color)));
        } else {
            s.append_plain("░ ");
        }
    }
    s
}

/// Brings every view in line with the widget state.
fn refresh(ui: &mut Cursive) {
    let snapshot = match snapshot(ui) {
        Some(s) => s,
        None => return,
    };

    ui.call_on_name("password", |l: &mut TextView| {
        l.set_content(snapshot.password.clone());
    });
    ui.call_on_name("copy", |b: &mut Button| {
        b.set_label(if snapshot.is_copied { "Copied" } else { "Copy" });
    });
    ui.call_on_name("length", |l: &mut TextView| {
        l.set_content(snapshot.options.length().to_string());
    });
    for (class, _) in CHARACTER_CLASSES.iter() {
        let checked = snapshot.options.is_enabled(*class);
        ui.call_on_name(&checkbox_name(*class), |c: &mut Checkbox| {
            if c.is_checked() != checked {
                let _ = c.set_checked(checked);
            }
        });
    }
    ui.call_on_name("strength_label", |l: &mut TextView| {
        l.set_content(snapshot.label.to_uppercase());
    });
    ui.call_on_name("strength_meter", |l: &mut TextView| {
        l.set_content(render_meter(&snapshot.meter));
    });
}

fn notify(ui: &mut Cursive, notification: Notification) {
    ui.call_on_name("status_bar", |l: &mut TextView| {
        l.set_content(format!(
            "{} {}",
            notification.title(),
            notification.description()
        ));
    });

    if notification.is_destructive() {
        helpers::dialog(ui, notification.title(), notification.description());
    }
}

fn copy(ui: &mut Cursive) {
    if let Some(notification) = ui.with_user_data(|w: &mut PasswordWidget| w.copy()) {
        notify(ui, notification);
    }
    refresh(ui);
}

fn generate(ui: &mut Cursive) {
    if let Some(Err(err)) = ui.with_user_data(|w: &mut PasswordWidget| w.regenerate()) {
        helpers::errorbox(ui, &err);
    }
    refresh(ui);
}

fn set_length(ui: &mut Cursive, length: usize) {
    if let Some(Err(err)) = ui.with_user_data(|w: &mut PasswordWidget| w.set_length(length)) {
        helpers::errorbox(ui, &err);
    }
    refresh(ui);
}

fn toggle(ui: &mut Cursive, class: CharacterClass, checked: bool) {
    match ui.with_user_data(|w: &mut PasswordWidget| w.toggle(class, checked)) {
        Some(Ok(Some(notification))) => notify(ui, notification),
        Some(Err(err)) => helpers::errorbox(ui, &err),
        _ => {}
    }
    // puts the checkbox back when the change was refused
    refresh(ui);
}

fn length_slider(options: &Options) -> SliderView {
    SliderView::horizontal(SLIDER_WIDTH)
        .value(options.length() - MIN_LENGTH)
        .on_change(|s, position| set_length(s, position + MIN_LENGTH))
}

fn layout(options: &Options) -> impl View {
    let password_row = LinearLayout::horizontal()
        .child(TextView::new("").with_name("password").full_width())
        .child(Button::new("Copy", copy).with_name("copy"));

    let length_row = LinearLayout::horizontal()
        .child(TextView::new("Character Length").full_width())
        .child(TextView::new(options.length().to_string()).with_name("length"));

    let mut classes = LinearLayout::vertical();
    for (class, label) in CHARACTER_CLASSES.iter() {
        let class = *class;
        classes.add_child(
            LinearLayout::horizontal()
                .child(
                    Checkbox::new()
                        .with_checked(options.is_enabled(class))
                        .on_change(move |s, checked| toggle(s, class, checked))
                        .with_name(checkbox_name(class)),
                )
                .child(TextView::new(format!(" {label}"))),
        );
    }

    let strength_row = LinearLayout::horizontal()
        .child(TextView::new("STRENGTH").full_width())
        .child(TextView::new("").with_name("strength_label"))
        .child(TextView::new(" "))
        .child(TextView::new("").with_name("strength_meter"));

    LinearLayout::vertical()
        .child(
            Dialog::around(
                LinearLayout::vertical()
                    .child(password_row)
                    .child(TextView::new(" "))
                    .child(length_row)
                    .child(length_slider(options))
                    .child(TextView::new(" "))
                    .child(classes)
                    .child(TextView::new(" "))
                    .child(strength_row)
                    .child(TextView::new(" "))
                    .child(Button::new("GENERATE", generate)),
            )
            .title("Password Generator")
            .fixed_width(DIALOG_WIDTH),
        )
        .child(
            LinearLayout::horizontal()
                .child(TextView::new("CTRL-Y: Copy | CTRL-G: Generate | ESC: Quit | "))
                .child(TextView::new("").with_name("status_bar"))
                .full_width(),
        )
}

fn main() {
    env_logger::init();

    let home = std::env::var("HOME").ok().map(PathBuf::from);
    let xdg_config_home = std::env::var("XDG_CONFIG_HOME").ok().map(PathBuf::from);

    let (settings, config_file_location) = match read_config(&home, &xdg_config_home) {
        Ok(t) => t,
        Err(err) => {
            eprintln!("Error {err}");
            process::exit(1);
        }
    };

    let options = match options_from_config(&settings) {
        Ok(options) => options,
        Err(err) => {
            eprintln!(
                "Error in {}: {err}",
                config_file_location.display()
            );
            process::exit(1);
        }
    };

    let widget = match PasswordWidget::new(options, Box::new(SystemClipboard::new())) {
        Ok(w) => w,
        Err(err) => {
            eprintln!("Error {err}");
            process::exit(1);
        }
    };

    let mut ui = cursive::default();

    if let Err(err) = ui.load_toml(include_str!("../res/style.toml")) {
        error!("failed to load theme: {err:?}");
    }

    ui.set_user_data(widget);

    ui.add_global_callback(Event::CtrlChar('y'), copy);
    ui.add_global_callback(Event::CtrlChar('g'), generate);
    ui.add_global_callback(Event::Key(Key::Esc), |s| s.quit());
    ui.add_global_callback('q', |s| s.quit());

    ui.add_layer(layout(&options));
    refresh(&mut ui);

    ui.run();

    if let Some(w) = ui.user_data::<PasswordWidget>() {
        if let Err(err) = save_config(w.options(), &config_file_location) {
            error!("failed to save settings: {err}");
        }
    }
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod tests;
