use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;

use crate::config;
use crate::events::AppEvent;
use crate::geometry::{self, Point, WheelGeometry};
use crate::gui::scene::{Scene, SnapTarget};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::view;
use crate::gui::SNAP_ANIMATION_MS;

pub struct AppModel {
    pub scene: Rc<RefCell<Scene>>,
    pub config_override: Option<PathBuf>,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    DragBegin(Point),
    DragMove(Point),
    DragEnd,
    ToggleAccents,
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        Scene,
        async_channel::Receiver<AppEvent>,
        Option<PathBuf>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Zodiac Wheel"),
            set_default_size: (480, 600),
            add_css_class: "zodiac-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gdk4::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 12,
                set_margin_all: 12,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    set_content_width: 360,
                    set_content_height: 360,
                    add_css_class: "zodiac-wheel",

                    // one gesture covers mouse drags and touch sequences
                    add_controller = gtk::GestureDrag {
                        connect_drag_begin[sender] => move |_, x, y| {
                            sender.input(AppMsg::DragBegin(Point::new(x, y)));
                        },
                        connect_drag_update[sender] => move |gesture, dx, dy| {
                            if let Some((sx, sy)) = gesture.start_point() {
                                sender.input(AppMsg::DragMove(Point::new(sx + dx, sy + dy)));
                            }
                        },
                        connect_drag_end[sender] => move |_, _, _| {
                            sender.input(AppMsg::DragEnd);
                        },
                    },
                },

                gtk::Label {
                    set_label: "Your soulmate sign",
                },

                #[name = "soulmate_label"]
                gtk::Label {
                    add_css_class: "soulmate-label",
                    #[watch]
                    set_label: &model.scene.borrow().selected.to_string(),
                },

                gtk::Button {
                    #[watch]
                    set_label: if model.scene.borrow().show_accents {
                        "Hide purple markers"
                    } else {
                        "Show purple markers"
                    },
                    connect_clicked[sender] => move |_| {
                        sender.input(AppMsg::ToggleAccents);
                    },
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (scene, rx, config_override) = init;

        theme::load_css();

        let scene = Rc::new(RefCell::new(scene));

        let model = AppModel {
            scene: scene.clone(),
            config_override,
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let scene_draw = model.scene.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                let geometry = WheelGeometry::fit(width as f64, height as f64);
                if let Err(e) = view::draw(cr, &scene_draw.borrow(), &geometry, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::DragBegin(pointer) => {
                // the wheel follows the hand; any in-flight glide is
                // abandoned by its tick callback
                let center = self.wheel_center();
                self.scene.borrow_mut().begin_drag(pointer, center);
            }
            AppMsg::DragMove(pointer) => {
                let center = self.wheel_center();
                if self.scene.borrow_mut().drag_to(pointer, center) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::DragEnd => {
                let target = self.scene.borrow_mut().end_drag();
                if let Some(target) = target {
                    log::debug!(
                        "Committed rotation {} -> {}",
                        target.to,
                        self.scene.borrow().selected
                    );
                    start_snap_animation(&self.drawing_area, self.scene.clone(), target);
                }
            }
            AppMsg::ToggleAccents => {
                self.scene.borrow_mut().toggle_accents();
                self.drawing_area.queue_draw();
            }
            AppMsg::ConfigReload => match config::load_config(self.config_override.as_ref()) {
                Ok(new_config) => {
                    self.scene.borrow_mut().apply_config(&new_config);
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Quit => self.root.close(),
        }
    }
}

impl AppModel {
    /// Center of the wheel in widget coordinates, read off the current
    /// allocation so it tracks resizes.
    fn wheel_center(&self) -> Point {
        Point::new(
            self.drawing_area.width() as f64 / 2.0,
            self.drawing_area.height() as f64 / 2.0,
        )
    }
}

/// Glide the displayed rotation to the snapped target with an ease-out
/// curve, driven by the frame clock. A new drag interrupts the glide.
fn start_snap_animation(
    drawing_area: &gtk::DrawingArea,
    scene: Rc<RefCell<Scene>>,
    target: SnapTarget,
) {
    let arc = geometry::shortest_arc(target.from, target.to);
    if arc.abs() < f64::EPSILON {
        scene.borrow_mut().display_rotation = target.to;
        drawing_area.queue_draw();
        return;
    }

    let started: Cell<Option<i64>> = Cell::new(None);
    drawing_area.add_tick_callback(move |drawing_area, clock| {
        let mut scene = scene.borrow_mut();
        if scene.state.is_dragging() {
            return glib::ControlFlow::Break;
        }

        let now = clock.frame_time();
        let start = match started.get() {
            Some(start) => start,
            None => {
                started.set(Some(now));
                now
            }
        };
        let t = (now - start) as f64 / (SNAP_ANIMATION_MS * 1000.0);

        if t >= 1.0 {
            scene.display_rotation = target.to;
            drawing_area.queue_draw();
            glib::ControlFlow::Break
        } else {
            scene.display_rotation =
                (target.from + arc * geometry::ease_out_cubic(t)).rem_euclid(360.0);
            drawing_area.queue_draw();
            glib::ControlFlow::Continue
        }
    });
}
