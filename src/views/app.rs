// ============================================================================
// APP VIEW - Composición de la UI sobre el mapa
// ============================================================================
// Botones de sesión, paneles de autenticación y el contenido del popup
// activo. El anclaje geográfico del popup lo hace el mapa (ver App::render).
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{ActivePopup, AppState, AuthPanel, ViewEvent};
use crate::viewmodels::SessionViewModel;
use crate::views::{render_login, render_pin_form, render_pin_popup, render_register};

/// Renderizar la capa de UI completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?
        .class("app-overlay")
        .build();

    let session_active = state.with_view(|v| v.session_active());

    if session_active {
        append_child(&root, &render_logout_button(state)?)?;
    } else {
        append_child(&root, &render_auth_buttons(state)?)?;
    }

    match state.with_view(|v| v.auth_panel) {
        AuthPanel::Login => append_child(&root, &render_login(state)?)?,
        AuthPanel::Register => append_child(&root, &render_register(state)?)?,
        AuthPanel::None => {}
    }

    match state.with_view(|v| v.active_popup.clone()) {
        ActivePopup::Viewing(_) => {
            if let Some(pin) = state.with_view(|v| v.selected_pin().cloned()) {
                append_child(&root, &render_pin_popup(&pin)?)?;
            }
        }
        ActivePopup::Drafting(draft) => {
            append_child(&root, &render_pin_form(state, &draft)?)?;
        }
        ActivePopup::None => {}
    }

    Ok(root)
}

fn render_logout_button(state: &AppState) -> Result<Element, JsValue> {
    let logout_btn = ElementBuilder::new("button")?
        .class("button logout")
        .text("Log out")
        .build();

    let state_clone = state.clone();
    on_click(&logout_btn, move |_: MouseEvent| {
        // Limpiar la copia durable y la de memoria; los pins no se tocan
        SessionViewModel::new().logout();
        state_clone.apply(ViewEvent::LoggedOut);
    })?;

    Ok(logout_btn)
}

fn render_auth_buttons(state: &AppState) -> Result<Element, JsValue> {
    let buttons = ElementBuilder::new("div")?
        .class("buttons")
        .build();

    let login_btn = ElementBuilder::new("button")?
        .class("button login")
        .text("Login")
        .build();

    let state_clone = state.clone();
    on_click(&login_btn, move |_: MouseEvent| {
        state_clone.apply(ViewEvent::LoginToggled);
    })?;

    let register_btn = ElementBuilder::new("button")?
        .class("button register")
        .text("Register")
        .build();

    let state_clone = state.clone();
    on_click(&register_btn, move |_: MouseEvent| {
        state_clone.apply(ViewEvent::RegisterToggled);
    })?;

    append_child(&buttons, &login_btn)?;
    append_child(&buttons, &register_btn)?;

    Ok(buttons)
}
