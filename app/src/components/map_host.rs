//! Bridge component between the Leptos UI and the imperative
//! `floorplan::Engine`.
//!
//! The engine owns the canvas and all gesture state; this component feeds it
//! pointer/wheel/key events, folds the actions it returns back into the
//! state slices, and re-renders when asked. On the server only a placeholder
//! `<canvas>` is emitted.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::session::{Role, SessionState};
use crate::state::directory::{DirectoryMsg, DirectoryOp, DirectoryState};
use crate::state::rooms::{RoomsMsg, RoomsOp, RoomsState};

/// The floor-plan map. `edit` switches the engine into the admin's editor
/// mode and shows the editing toolbar instead of the room popup.
#[component]
pub fn MapHost(#[prop(optional)] edit: bool) -> impl IntoView {
    let creation_id = RwSignal::new(String::new());

    view! {
        <div class="map-host">
            {edit.then(|| view! { <EditToolbar creation_id=creation_id/> })}
            {canvas_view(edit, creation_id)}
            {(!edit).then(|| view! { <RoomPopup/> })}
        </div>
    }
}

#[cfg(not(feature = "hydrate"))]
fn canvas_view(_edit: bool, _creation_id: RwSignal<String>) -> AnyView {
    view! {
        <canvas class="map-canvas">"The map needs a browser to render."</canvas>
    }
    .into_any()
}

#[cfg(feature = "hydrate")]
fn canvas_view(edit: bool, creation_id: RwSignal<String>) -> AnyView {
    hydrated::canvas_view(edit, creation_id)
}

// ── editor toolbar ──

/// Room-id entry for rectangle creation plus the save button.
#[component]
fn EditToolbar(creation_id: RwSignal<String>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let rooms = expect_context::<RwSignal<RoomsState>>();
    let saved = RwSignal::new(false);

    let save = move |_| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        let graphics = rooms.with_untracked(|r| r.room_graphics.clone());
        saved.set(false);
        rooms.update(|r| r.reduce(RoomsMsg::Started(RoomsOp::SaveMap)));
        leptos::task::spawn_local(async move {
            match api::save_map(&token, &graphics).await {
                Ok(()) => {
                    rooms.update(|r| r.reduce(RoomsMsg::Saved));
                    saved.set(true);
                }
                Err(error) => rooms.update(|r| r.reduce(RoomsMsg::Failed(error))),
            }
        });
    };

    view! {
        <div class="edit-toolbar">
            <label>
                "Room id for new rectangles"
                <input
                    prop:value=creation_id
                    on:input:target=move |ev| creation_id.set(ev.target().value())
                />
            </label>
            <button on:click=save disabled=move || rooms.with(|r| r.loading)>
                "Save map"
            </button>
            {move || saved.get().then(|| view! { <span class="form-success">"Saved."</span> })}
            {move || {
                rooms.with(|r| r.error.clone()).map(|e| view! { <p class="form-error">{e}</p> })
            }}
        </div>
    }
}

// ── room popup ──

/// Details for the selected room, shown next to the map in view mode.
#[component]
fn RoomPopup() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let rooms = expect_context::<RwSignal<RoomsState>>();
    let directory = expect_context::<RwSignal<DirectoryState>>();
    let navigate = use_navigate();

    let role = move || session.with(|s| s.session.as_ref().map(|x| x.role));

    let close = move |_| {
        rooms.update(|r| {
            r.reduce(RoomsMsg::SelectRoom(None));
            r.reduce(RoomsMsg::SelectRect(None));
        });
        directory.update(|d| d.reduce(DirectoryMsg::ClearRoomReaders));
    };

    let show_readers = move |_| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        let Some(room_id) = rooms.with_untracked(|r| r.selected_room.clone()) else {
            return;
        };
        directory.update(|d| d.reduce(DirectoryMsg::Started(DirectoryOp::RoomReaders)));
        leptos::task::spawn_local(async move {
            match api::fetch_readers_for_room(&token, &room_id).await {
                Ok(users) => directory.update(|d| d.reduce(DirectoryMsg::RoomReadersLoaded(users))),
                Err(error) => directory.update(|d| d.reduce(DirectoryMsg::Failed(error))),
            }
        });
    };

    let request_access = {
        let navigate = navigate.clone();
        move |_| navigate("/reader/requests/form", Default::default())
    };
    let go_revoke = move |_| navigate("/approver/requests/revoke", Default::default());

    view! {
        <div class="room-popup">
            {move || {
                let request_access = request_access.clone();
                let show_readers = show_readers.clone();
                let go_revoke = go_revoke.clone();
                let close = close.clone();
                let selected = rooms.with(|r| r.selected_room.clone());
                let Some(room_id) = selected else {
                    return ().into_any();
                };
                let meta = rooms.with(|r| r.room_data.get(&room_id).cloned());
                let title = meta
                    .as_ref()
                    .map_or_else(|| room_id.clone(), |m| format!("{} ({room_id})", m.name));
                let approvers = meta.as_ref().map_or_else(Vec::new, |m| m.approvers.clone());
                let status = meta.as_ref().map(|m| {
                    if m.access {
                        m.expires.clone().map_or_else(
                            || "You have access.".to_owned(),
                            |until| format!("You have access until {until}."),
                        )
                    } else {
                        "You do not have access.".to_owned()
                    }
                });
                let role_section = match role() {
                    Some(Role::Reader) => view! {
                        <button on:click=request_access>"Request access"</button>
                    }
                    .into_any(),
                    Some(Role::Approver) => view! {
                        <div>
                            <button on:click=show_readers>"Who has access?"</button>
                            <button on:click=go_revoke>"Revoke access"</button>
                            <ul>
                                <For
                                    each=move || directory.with(|d| d.users_with_access.clone())
                                    key=|user| user.email.clone()
                                    let:user
                                >
                                    <li>
                                        {format!("{} {} <{}>", user.name, user.surname, user.email)}
                                    </li>
                                </For>
                            </ul>
                        </div>
                    }
                    .into_any(),
                    _ => ().into_any(),
                };
                view! {
                    <div class="popup-body">
                        <h3>{title}</h3>
                        {status.map(|s| view! { <p>{s}</p> })}
                        {(!approvers.is_empty())
                            .then(|| {
                                view! {
                                    <div class="popup-approvers">
                                        <h4>"Responsible approvers"</h4>
                                        <ul>
                                            {approvers
                                                .iter()
                                                .map(|a| view! { <li>{a.clone()}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })}
                        {role_section}
                        <button on:click=close>"Close"</button>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

// ── hydrate-only engine wiring ──

#[cfg(feature = "hydrate")]
mod hydrated {
    use std::cell::RefCell;
    use std::rc::Rc;

    use floorplan::camera::Point;
    use floorplan::consts::RESIZE_DEBOUNCE_MS;
    use floorplan::engine::{AccessFlags, Action, Engine};
    use floorplan::input::{Button, Key, Mode, WheelDelta};
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::net::api;
    use crate::net::types;
    use crate::session::{Role, SessionState};
    use crate::state::directory::{DirectoryMsg, DirectoryState};
    use crate::state::rooms::{RoomsMsg, RoomsOp, RoomsState};

    type EngineCell = Rc<RefCell<Option<Engine>>>;
    type ImageCell = Rc<RefCell<Option<web_sys::HtmlImageElement>>>;

    fn graphics_to_engine(src: &types::RoomGraphics) -> floorplan::plan::RoomGraphics {
        src.iter()
            .map(|(room, rects)| {
                let rects = rects
                    .iter()
                    .map(|r| floorplan::plan::RectGeom {
                        x: r.x,
                        y: r.y,
                        width: r.width,
                        height: r.height,
                    })
                    .collect();
                (room.clone(), rects)
            })
            .collect()
    }

    fn graphics_to_wire(src: &floorplan::plan::RoomGraphics) -> types::RoomGraphics {
        src.iter()
            .map(|(room, rects)| {
                let rects = rects
                    .iter()
                    .map(|r| types::RectGeom {
                        x: r.x,
                        y: r.y,
                        width: r.width,
                        height: r.height,
                    })
                    .collect();
                (room.clone(), rects)
            })
            .collect()
    }

    fn access_flags(
        data: &std::collections::HashMap<String, types::RoomMeta>,
    ) -> std::collections::HashMap<String, AccessFlags> {
        data.iter()
            .map(|(room, meta)| {
                let flags =
                    AccessFlags { has_access: meta.access, expiring: meta.warn_date.is_some() };
                (room.clone(), flags)
            })
            .collect()
    }

    pub fn canvas_view(edit: bool, creation_id: RwSignal<String>) -> AnyView {
        let session = expect_context::<RwSignal<SessionState>>();
        let rooms = expect_context::<RwSignal<RoomsState>>();
        let directory = expect_context::<RwSignal<DirectoryState>>();

        let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
        let engine: EngineCell = Rc::default();
        let image: ImageCell = Rc::default();

        let redraw = {
            let engine = engine.clone();
            let image = image.clone();
            move || {
                if let Some(engine) = engine.borrow().as_ref() {
                    if let Err(err) = engine.render(image.borrow().as_ref()) {
                        log::warn!("map render failed: {err:?}");
                    }
                }
            }
        };

        // Fold engine actions back into the slices.
        let apply = {
            let redraw = redraw.clone();
            move |actions: Vec<Action>| {
                for action in actions {
                    match action {
                        Action::RectSelected { room, rect } => rooms.update(|r| {
                            r.reduce(RoomsMsg::SelectRoom(Some(room.clone())));
                            r.reduce(RoomsMsg::SelectRect(Some(rect)));
                        }),
                        Action::SelectionCleared => rooms.update(|r| {
                            r.reduce(RoomsMsg::SelectRoom(None));
                            r.reduce(RoomsMsg::SelectRect(None));
                        }),
                        Action::PlanChanged(graphics) => rooms.update(|r| {
                            r.reduce(RoomsMsg::SetRoomGraphics(graphics_to_wire(&graphics)));
                        }),
                        Action::RenderNeeded => redraw(),
                    }
                }
            }
        };

        // Engine construction, image load, and initial fetches on mount.
        {
            let engine = engine.clone();
            let image = image.clone();
            let redraw = redraw.clone();
            Effect::new(move |_| {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                if engine.borrow().is_some() {
                    return;
                }
                let mode = if edit { Mode::Edit } else { Mode::View };
                let width = f64::from(canvas.client_width());
                let height = f64::from(canvas.client_height());
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                {
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);
                }
                let mut fresh = Engine::new(canvas.clone(), mode);
                fresh.core.set_viewport(width, height);
                fresh.core.set_creation_id(creation_id.get_untracked());
                if session.with_untracked(|s| {
                    s.session.as_ref().is_some_and(|x| x.role == Role::Admin)
                }) && !edit
                {
                    fresh.core.set_all_responsible(true);
                }
                *engine.borrow_mut() = Some(fresh);

                // Floor-plan backdrop; dimensions gate camera clamping.
                if let Ok(img) = web_sys::HtmlImageElement::new() {
                    img.set_src("/map.png");
                    let onload = Closure::<dyn FnMut()>::new({
                        let engine = engine.clone();
                        let redraw = redraw.clone();
                        let img = img.clone();
                        move || {
                            if let Some(engine) = engine.borrow_mut().as_mut() {
                                engine.core.set_image(
                                    f64::from(img.natural_width()),
                                    f64::from(img.natural_height()),
                                );
                            }
                            redraw();
                        }
                    });
                    img.set_onload(Some(onload.as_ref().unchecked_ref()));
                    onload.forget();
                    *image.borrow_mut() = Some(img);
                }

                let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
                    return;
                };
                let role = session.with_untracked(|s| s.session.as_ref().map(|x| x.role));
                rooms.update(|r| r.reduce(RoomsMsg::Started(RoomsOp::Map)));
                leptos::task::spawn_local({
                    let engine = engine.clone();
                    let redraw = redraw.clone();
                    async move {
                        match api::fetch_map(&token).await {
                            Ok(graphics) => {
                                if let Some(engine) = engine.borrow_mut().as_mut() {
                                    engine.core.load_graphics(&graphics_to_engine(&graphics));
                                }
                                rooms.update(|r| r.reduce(RoomsMsg::MapLoaded(graphics)));
                            }
                            Err(error) => rooms.update(|r| r.reduce(RoomsMsg::Failed(error))),
                        }
                        match role {
                            Some(Role::Reader) => match api::fetch_access(&token).await {
                                Ok(data) => {
                                    if let Some(engine) = engine.borrow_mut().as_mut() {
                                        engine.core.set_access(access_flags(&data));
                                    }
                                    rooms.update(|r| r.reduce(RoomsMsg::AccessLoaded(data)));
                                    // Fresh personal data; any user picked on
                                    // another page is stale now.
                                    directory
                                        .update(|d| d.reduce(DirectoryMsg::SelectUser(None)));
                                }
                                Err(error) => {
                                    rooms.update(|r| r.reduce(RoomsMsg::Failed(error)));
                                }
                            },
                            Some(Role::Approver) => {
                                match api::fetch_responsibilities(&token).await {
                                    Ok(list) => {
                                        if let Some(engine) = engine.borrow_mut().as_mut() {
                                            engine
                                                .core
                                                .set_responsibilities(list.iter().cloned());
                                        }
                                        rooms.update(|r| {
                                            r.reduce(RoomsMsg::ResponsibilitiesLoaded(list));
                                        });
                                    }
                                    Err(error) => {
                                        rooms.update(|r| r.reduce(RoomsMsg::Failed(error)));
                                    }
                                }
                            }
                            Some(Role::Admin) if edit => {
                                match api::fetch_admin_rooms(&token).await {
                                    Ok(ids) => {
                                        if let Some(engine) = engine.borrow_mut().as_mut() {
                                            engine.core.set_legal_room_ids(ids.clone());
                                        }
                                        rooms.update(|r| {
                                            r.reduce(RoomsMsg::LegalRoomsLoaded(ids));
                                        });
                                    }
                                    Err(error) => {
                                        rooms.update(|r| r.reduce(RoomsMsg::Failed(error)));
                                    }
                                }
                            }
                            _ => {}
                        }
                        redraw();
                    }
                });
            });
        }

        // Keep the engine in step with the slices.
        {
            let engine = engine.clone();
            let redraw = redraw.clone();
            Effect::new(move |_| {
                let highlighted = rooms.with(|r| r.highlighted_rooms.clone());
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.core.set_highlighted(highlighted);
                }
                redraw();
            });
        }
        {
            let engine = engine.clone();
            Effect::new(move |_| {
                let id = creation_id.get();
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.core.set_creation_id(id);
                }
            });
        }

        // Delete-key handling lives on the window; the canvas never has focus.
        {
            let engine = engine.clone();
            let apply = apply.clone();
            let handle =
                window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
                    let actions = engine
                        .borrow_mut()
                        .as_mut()
                        .map(|e| e.core.on_key_down(&Key(ev.key())));
                    if let Some(actions) = actions {
                        apply(actions);
                    }
                });
            on_cleanup(move || handle.remove());
        }

        // Window resizes re-measure the canvas, debounced by re-arming a
        // timeout (dropping the previous one cancels it).
        {
            let engine = engine.clone();
            let redraw = redraw.clone();
            let pending: Rc<RefCell<Option<gloo_timers::callback::Timeout>>> = Rc::default();
            let handle = window_event_listener(leptos::ev::resize, move |_| {
                let engine = engine.clone();
                let redraw = redraw.clone();
                let timeout = gloo_timers::callback::Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                    let mut resized = false;
                    if let Some(canvas) = canvas_ref.get_untracked() {
                        if let Some(engine) = engine.borrow_mut().as_mut() {
                            let width = f64::from(canvas.client_width());
                            let height = f64::from(canvas.client_height());
                            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                            {
                                canvas.set_width(width as u32);
                                canvas.set_height(height as u32);
                            }
                            engine.core.set_viewport(width, height);
                            resized = true;
                        }
                    }
                    if resized {
                        redraw();
                    }
                });
                *pending.borrow_mut() = Some(timeout);
            });
            on_cleanup(move || handle.remove());
        }

        let on_pointer_down = {
            let engine = engine.clone();
            let apply = apply.clone();
            move |ev: web_sys::PointerEvent| {
                let at = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                let button = match ev.button() {
                    0 => Button::Primary,
                    1 => Button::Middle,
                    _ => Button::Secondary,
                };
                let actions =
                    engine.borrow_mut().as_mut().map(|e| e.core.on_pointer_down(at, button));
                if let Some(actions) = actions {
                    apply(actions);
                }
            }
        };

        let on_pointer_move = {
            let engine = engine.clone();
            let apply = apply.clone();
            move |ev: web_sys::PointerEvent| {
                let at = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                let actions = engine.borrow_mut().as_mut().map(|e| e.core.on_pointer_move(at));
                if let Some(actions) = actions {
                    apply(actions);
                }
            }
        };

        let on_pointer_up = {
            let engine = engine.clone();
            let apply = apply.clone();
            move |ev: web_sys::PointerEvent| {
                let at = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                let button = match ev.button() {
                    0 => Button::Primary,
                    1 => Button::Middle,
                    _ => Button::Secondary,
                };
                let actions =
                    engine.borrow_mut().as_mut().map(|e| e.core.on_pointer_up(at, button));
                if let Some(actions) = actions {
                    apply(actions);
                }
            }
        };

        let on_wheel = {
            let engine = engine.clone();
            let apply = apply.clone();
            move |ev: web_sys::WheelEvent| {
                ev.prevent_default();
                let at = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
                let actions = engine.borrow_mut().as_mut().map(|e| e.core.on_wheel(at, delta));
                if let Some(actions) = actions {
                    apply(actions);
                }
            }
        };

        let on_double_click = {
            let engine = engine.clone();
            move |ev: web_sys::MouseEvent| {
                let at = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                let actions = engine.borrow_mut().as_mut().map(|e| e.core.on_double_click(at));
                if let Some(actions) = actions {
                    apply(actions);
                }
            }
        };

        view! {
            <canvas
                class="map-canvas"
                node_ref=canvas_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:wheel=on_wheel
                on:dblclick=on_double_click
            >
                "The map needs a browser to render."
            </canvas>
        }
        .into_any()
    }
}
