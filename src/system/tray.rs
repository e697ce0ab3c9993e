//! Tray icon and its context menu

use image::imageops::FilterType;
use tauri::image::Image;
use tauri::menu::{IsMenuItem, Menu, MenuEvent, MenuItem, PredefinedMenuItem};
use tauri::tray::TrayIconBuilder;
use tauri::{AppHandle, Manager, Wry};

use crate::core::clipboard::ClipboardMonitor;
use crate::core::ports::TrayMenu;
use crate::core::tray::{menu_template, MenuEntry, QUIT_LABEL};
use crate::shared::{StackError, StackResult};

pub const TRAY_ID: &str = "paste-stack";

/// Tray icons are drawn at 16x16
const ICON_SIZE: u32 = 16;

const TRAY_ICON_PNG: &[u8] = include_bytes!("../../icons/paste.png");

const SLOT_ID_PREFIX: &str = "slot:";
const PLACEHOLDER_ID: &str = "empty";
const QUIT_ID: &str = "quit";

/// Tray menu rebuilt through the app handle
pub struct TauriTray {
    app: AppHandle,
}

impl TauriTray {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl TrayMenu for TauriTray {
    fn set_menu(&self, template: &[MenuEntry]) -> StackResult<()> {
        let menu = build_menu(&self.app, template)?;
        let tray = self
            .app
            .tray_by_id(TRAY_ID)
            .ok_or_else(|| StackError::Tray(format!("No tray icon with id '{}'", TRAY_ID)))?;
        tray.set_menu(Some(menu))
            .map_err(|e| StackError::Menu(e.to_string()))
    }
}

/// Create the tray icon showing the empty-history menu
pub fn create(app: &AppHandle) -> StackResult<()> {
    let menu = build_menu(app, &menu_template(&[]))?;

    let mut builder = TrayIconBuilder::with_id(TRAY_ID)
        .tooltip("Paste Stack")
        .menu(&menu)
        .on_menu_event(handle_menu_event);

    match load_icon() {
        Ok(icon) => builder = builder.icon(icon),
        Err(e) => {
            log::warn!("[Tray] {}, falling back to the app icon", e);
            if let Some(icon) = app.default_window_icon() {
                builder = builder.icon(icon.clone());
            }
        }
    }

    builder.build(app)?;
    log::info!("[Tray] Tray icon created");
    Ok(())
}

/// Decode the bundled tray PNG and scale it to the tray size
fn load_icon() -> StackResult<Image<'static>> {
    let icon = image::load_from_memory(TRAY_ICON_PNG)?
        .resize_exact(ICON_SIZE, ICON_SIZE, FilterType::Lanczos3)
        .into_rgba8();
    let (width, height) = icon.dimensions();
    Ok(Image::new_owned(icon.into_raw(), width, height))
}

fn build_menu(app: &AppHandle, template: &[MenuEntry]) -> StackResult<Menu<Wry>> {
    let menu_err = |e: tauri::Error| StackError::Menu(e.to_string());

    let mut items: Vec<Box<dyn IsMenuItem<Wry>>> = Vec::with_capacity(template.len());
    for entry in template {
        let item: Box<dyn IsMenuItem<Wry>> = match entry {
            MenuEntry::Slot { slot, label, accelerator } => Box::new(
                MenuItem::with_id(
                    app,
                    format!("{}{}", SLOT_ID_PREFIX, slot),
                    label,
                    true,
                    Some(accelerator.as_str()),
                )
                .map_err(menu_err)?,
            ),
            MenuEntry::Placeholder { label } => Box::new(
                MenuItem::with_id(app, PLACEHOLDER_ID, label, false, None::<&str>)
                    .map_err(menu_err)?,
            ),
            MenuEntry::Separator => Box::new(PredefinedMenuItem::separator(app).map_err(menu_err)?),
            MenuEntry::Quit => Box::new(
                MenuItem::with_id(app, QUIT_ID, QUIT_LABEL, true, None::<&str>).map_err(menu_err)?,
            ),
        };
        items.push(item);
    }

    let refs: Vec<&dyn IsMenuItem<Wry>> = items.iter().map(|item| item.as_ref()).collect();
    Menu::with_items(app, &refs).map_err(menu_err)
}

fn handle_menu_event(app: &AppHandle, event: MenuEvent) {
    let id = event.id().as_ref();
    if id == QUIT_ID {
        log::info!("[Tray] Quit requested");
        app.exit(0);
        return;
    }

    match parse_slot_id(id) {
        Some(slot) => match app.try_state::<ClipboardMonitor>() {
            Some(monitor) => monitor.select(slot),
            None => log::warn!("[Tray] Clipboard monitor not ready, ignoring slot {}", slot),
        },
        None => log::debug!("[Tray] Unhandled menu event: {}", id),
    }
}

/// `"slot:3"` -> `Some(3)`
fn parse_slot_id(id: &str) -> Option<usize> {
    id.strip_prefix(SLOT_ID_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slot_id() {
        assert_eq!(parse_slot_id("slot:0"), Some(0));
        assert_eq!(parse_slot_id("slot:4"), Some(4));
        assert_eq!(parse_slot_id("slot:x"), None);
        assert_eq!(parse_slot_id(QUIT_ID), None);
        assert_eq!(parse_slot_id(PLACEHOLDER_ID), None);
    }

    #[test]
    fn test_bundled_icon_scales_to_tray_size() {
        let icon = load_icon().unwrap();
        assert_eq!(icon.width(), ICON_SIZE);
        assert_eq!(icon.height(), ICON_SIZE);
        assert_eq!(icon.rgba().len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
    }
}
