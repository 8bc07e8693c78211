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

use cursive::event::Key;
use cursive::theme::{BaseColor, Color};
use cursive::views::{Dialog, OnEventView, TextView};
use cursive::Cursive;

use passgen::strength::ColorTag;

pub fn errorbox(ui: &mut Cursive, err: &passgen::Error) {
    dialog(ui, "Error", &err.to_string());
}

/// Shows a dismissable message, Esc closes it as well.
pub fn dialog(ui: &mut Cursive, title: &str, text: &str) {
    let d = Dialog::around(TextView::new(text))
        .dismiss_button("Ok")
        .title(title);

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);
}

pub fn color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Red => Color::Light(BaseColor::Red),
        ColorTag::Orange => Color::Rgb(0xfb, 0x7c, 0x58),
        ColorTag::Yellow => Color::Light(BaseColor::Yellow),
        ColorTag::Green => Color::Rgb(0xa4, 0xff, 0xaf),
    }
}
