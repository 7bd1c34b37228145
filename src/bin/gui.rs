// SPDX-License-Identifier: MPL-2.0
//! Desktop form launcher.

fn main() -> iced::Result {
    geo_image_mapper::app::run()
}
