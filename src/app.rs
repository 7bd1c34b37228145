// SPDX-License-Identifier: MPL-2.0
//! Minimal desktop form for the mapper.
//!
//! One small window with a map-engine picker and two buttons (open file /
//! open folder). Results and warnings are shown in message dialogs; on
//! success the map URL opens in the default browser. All the domain work is
//! delegated to the extractor, scanner, and URL builder modules.

use crate::config;
use crate::directory_scanner;
use crate::extractor::{self, ExtractorOptions};
use crate::map_url::{MapProvider, DEFAULT_MARKERS_LIMIT};
use iced::widget::{button, column, container, pick_list, row, text};
use iced::{window, Element, Length, Task};
use std::fmt;
use std::path::PathBuf;

const WINDOW_WIDTH: f32 = 360.0;
const WINDOW_HEIGHT: f32 = 170.0;

/// Map engine choices offered by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineChoice {
    Yandex,
    Google,
}

impl EngineChoice {
    pub const ALL: [EngineChoice; 2] = [EngineChoice::Yandex, EngineChoice::Google];

    pub fn provider(self) -> MapProvider {
        match self {
            EngineChoice::Yandex => MapProvider::Yandex,
            EngineChoice::Google => MapProvider::Google,
        }
    }

    fn from_provider(provider: MapProvider) -> Self {
        match provider {
            MapProvider::Yandex => EngineChoice::Yandex,
            MapProvider::Google => EngineChoice::Google,
        }
    }
}

impl fmt::Display for EngineChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineChoice::Yandex => write!(f, "Yandex"),
            EngineChoice::Google => write!(f, "Google"),
        }
    }
}

/// Messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    EngineSelected(EngineChoice),
    OpenFilePressed,
    OpenFolderPressed,
    FileSelected(Option<PathBuf>),
    FolderSelected(Option<PathBuf>),
    DialogDismissed,
}

/// Form state: the selected engine and a status line.
#[derive(Debug)]
pub struct App {
    engine: EngineChoice,
    status: String,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let engine = config
            .map_engine
            .as_deref()
            .and_then(|s| MapProvider::from_selector(s).ok())
            .map(EngineChoice::from_provider)
            .unwrap_or(EngineChoice::Yandex);

        let app = App {
            engine,
            status: String::from("Pick a JPG file or a folder with images."),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("GeoImageMapper")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EngineSelected(engine) => {
                self.engine = engine;
                Task::none()
            }
            Message::OpenFilePressed => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("JPEG image", &["jpg", "jpeg"])
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::FileSelected,
            ),
            Message::OpenFolderPressed => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .pick_folder()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::FolderSelected,
            ),
            Message::FileSelected(Some(path)) => self.map_file(path),
            Message::FolderSelected(Some(path)) => self.map_folder(path),
            Message::FileSelected(None) | Message::FolderSelected(None) => Task::none(),
            Message::DialogDismissed => Task::none(),
        }
    }

    fn map_file(&mut self, path: PathBuf) -> Task<Message> {
        match extractor::extract_coordinates(&path, ExtractorOptions::default()) {
            Ok(Some(coords)) => {
                let url = self.engine.provider().single(&coords);
                self.status = format!("Found {coords}");
                self.open_map(&url)
            }
            Ok(None) => {
                self.status = String::from("Coordinates not found.");
                info_dialog(
                    "Coordinates not found",
                    format!(
                        "The file is not an image or carries no GPS coordinates:\n\n{}",
                        path.display()
                    ),
                )
            }
            Err(err) => {
                self.status = err.to_string();
                info_dialog("Error", err.to_string())
            }
        }
    }

    fn map_folder(&mut self, path: PathBuf) -> Task<Message> {
        let coords_list =
            match directory_scanner::scan_folder(&path, ExtractorOptions::default()) {
                Ok(list) => list,
                Err(err) => {
                    self.status = err.to_string();
                    return info_dialog("Error", err.to_string());
                }
            };

        if coords_list.is_empty() {
            self.status = String::from("No images with GPS coordinates found.");
            return info_dialog(
                "Coordinates not found",
                format!(
                    "No images with GPS coordinates found in:\n\n{}",
                    path.display()
                ),
            );
        }

        let url = match self
            .engine
            .provider()
            .multiple(&coords_list, DEFAULT_MARKERS_LIMIT)
        {
            Ok(url) => url,
            Err(err) => {
                self.status = err.to_string();
                return info_dialog("Error", err.to_string());
            }
        };

        self.status = format!(
            "Found {} images with GPS coordinates",
            coords_list.len()
        );

        let mut tasks = Vec::new();
        if coords_list.len() > DEFAULT_MARKERS_LIMIT {
            tasks.push(info_dialog(
                "Marker limit",
                format!(
                    "Found {} > {} images with GPS coordinates. Limited map to {} markers.",
                    coords_list.len(),
                    DEFAULT_MARKERS_LIMIT,
                    DEFAULT_MARKERS_LIMIT
                ),
            ));
        }
        tasks.push(self.open_map(&url));
        Task::batch(tasks)
    }

    fn open_map(&mut self, url: &str) -> Task<Message> {
        if let Err(err) = opener::open(url) {
            self.status = format!("Could not open browser: {err}");
            return info_dialog("Error", self.status.clone());
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let engine_row = row![
            text("Map service"),
            pick_list(EngineChoice::ALL, Some(self.engine), Message::EngineSelected),
        ]
        .spacing(10);

        let source_row = row![
            text("Choose source"),
            button(text("File")).on_press(Message::OpenFilePressed),
            button(text("Folder")).on_press(Message::OpenFolderPressed),
        ]
        .spacing(10);

        let content = column![engine_row, source_row, text(&self.status).size(14)]
            .spacing(12)
            .padding(16);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Shows an informational message dialog without blocking the UI loop.
fn info_dialog(title: &str, description: String) -> Task<Message> {
    let title = title.to_string();
    Task::perform(
        async move {
            rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Info)
                .set_title(title)
                .set_description(description)
                .show()
                .await;
        },
        |_| Message::DialogDismissed,
    )
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        resizable: false,
        ..window::Settings::default()
    }
}

/// Entry point used by the GUI binary to launch the Iced application loop.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}
