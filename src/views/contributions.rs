use super::{to_js, Mount};
use crate::constants::{
    CONTROLS_MARGIN_PX, FAILED_TO_LOAD, LOADING_CLASS, PLACEHOLDER_OPACITY, SLIDER_MIN,
};
use crate::dom::{self, EventListener};
use crate::fetch::fetch_contributions;
use crate::input::{snap_slider, Bounds};
use crate::render::helpers::css_px;
use crate::render::CellAdapter;
use folio_core::constants::{
    CONTRIBUTION_RADIUS, CONTRIBUTION_RADIUS_MAX, CONTRIBUTION_RADIUS_STEP, PLACEHOLDER_DAYS,
    PLACEHOLDER_WEEKS,
};
use folio_core::render::cell_color;
use folio_core::{build_cells, CalendarLayout, CellVisual, Field, Scene, Theme};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

type CellScene = Scene<CellVisual, CellAdapter>;

/// Contribution calendar whose cells scatter away from the pointer and
/// turn green once touched.
#[wasm_bindgen]
pub struct ContributionGraph {
    mount: Mount<CellVisual, CellAdapter>,
    _controls: Vec<EventListener>,
}

#[wasm_bindgen]
impl ContributionGraph {
    /// Mounts into `#container_id` and starts loading `user_name`'s
    /// calendar. A failed load leaves an inert, empty graph.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container_id: &str,
        user_name: &str,
        is_light: bool,
    ) -> Result<ContributionGraph, JsValue> {
        Self::mount(container_id, user_name, Theme::from_light(is_light)).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setRadius)]
    pub fn set_radius(&self, radius: f32) {
        self.mount.pointer.set_radius(radius);
    }

    pub fn radius(&self) -> f32 {
        self.mount.pointer.radius().get()
    }

    pub fn reset(&self) {
        self.mount.reset();
    }

    #[wasm_bindgen(js_name = setLight)]
    pub fn set_light(&self, is_light: bool) {
        self.mount.set_theme(Theme::from_light(is_light));
    }

    pub fn unmount(mut self) {
        self.mount.unmount();
    }
}

impl ContributionGraph {
    fn mount(container_id: &str, user_name: &str, theme: Theme) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let root: web::HtmlElement = dom::element_by_id(&document, container_id)?;
        root.set_inner_html("");

        let layout = CalendarLayout::default();
        let grid: web::HtmlElement = dom::create(&document, "div")?;
        root.append_child(&grid).map_err(dom::js_err)?;
        show_placeholder(&document, &grid, &layout, theme)?;

        let (row, slider) = build_controls(&document)?;
        root.append_child(&row).map_err(dom::js_err)?;

        let adapter = CellAdapter::new(grid.clone(), layout.cell_size);
        let mount = Mount::new(
            Field::default(),
            adapter,
            CONTRIBUTION_RADIUS,
            theme,
            &grid,
            Bounds::Unbounded,
        )?;
        let (reset, on_reset) = mount.reset_control(&document)?;
        row.append_child(&reset).map_err(dom::js_err)?;
        let controls = vec![wire_slider(&slider, &mount)?, on_reset];
        mount.start();

        spawn_local(load(
            user_name.to_string(),
            document,
            grid,
            layout,
            Rc::downgrade(&mount.scene),
        ));
        log::info!("[contributions] mounted #{} for {}", container_id, user_name);

        Ok(Self {
            mount,
            _controls: controls,
        })
    }
}

async fn load(
    user_name: String,
    document: web::Document,
    grid: web::HtmlElement,
    layout: CalendarLayout,
    scene: Weak<RefCell<CellScene>>,
) {
    let result = fetch_contributions(&user_name).await;
    let Some(scene) = scene.upgrade() else {
        log::debug!("[contributions] view gone before data arrived");
        return;
    };
    let calendar = match result {
        Ok(calendar) => calendar,
        Err(e) => {
            log::error!("[contributions] load failed: {:#}", e);
            show_failure(&grid);
            return;
        }
    };

    let cells = build_cells(&calendar, &layout);
    let days = calendar
        .weeks
        .iter()
        .map(|w| w.contribution_days.len())
        .max()
        .unwrap_or(0);
    let extent = layout.extent(calendar.weeks.len(), days);

    let mut scene = scene.borrow_mut();
    let theme = scene.theme();
    if let Err(e) = scene.adapter_mut().mount(&document, &cells, extent, theme) {
        log::error!("[contributions] could not build cells: {:#}", e);
        show_failure(&grid);
        return;
    }
    _ = grid.class_list().remove_1(LOADING_CLASS);
    _ = grid.style().remove_property("opacity");
    scene.replace_entities(cells);
}

fn show_placeholder(
    document: &web::Document,
    grid: &web::HtmlElement,
    layout: &CalendarLayout,
    theme: Theme,
) -> anyhow::Result<()> {
    let extent = layout.extent(PLACEHOLDER_WEEKS, PLACEHOLDER_DAYS);
    dom::set_styles(
        grid,
        &[
            ("position", "relative"),
            ("width", &css_px(extent.x)),
            ("height", &css_px(extent.y)),
            ("opacity", PLACEHOLDER_OPACITY),
        ],
    );
    _ = grid.class_list().add_1(LOADING_CLASS);

    let cells = layout.grid();
    let size = css_px(layout.cell_size);
    let color = cell_color(0, false, theme).to_hex();
    let half = layout.cell_size * 0.5;
    for week in 0..PLACEHOLDER_WEEKS {
        for day in 0..PLACEHOLDER_DAYS {
            let at = cells.rest_position(week, day);
            let el: web::HtmlElement = dom::create(document, "div")?;
            dom::set_styles(
                &el,
                &[
                    ("position", "absolute"),
                    ("left", &css_px(at.x - half)),
                    ("top", &css_px(at.y - half)),
                    ("width", &size),
                    ("height", &size),
                    ("border-radius", "9999px"),
                    ("background-color", &color),
                ],
            );
            grid.append_child(&el).map_err(dom::js_err)?;
        }
    }
    Ok(())
}

fn show_failure(grid: &web::HtmlElement) {
    _ = grid.class_list().remove_1(LOADING_CLASS);
    dom::set_styles(
        grid,
        &[
            ("opacity", "1"),
            ("width", "100%"),
            ("height", "auto"),
            ("display", "flex"),
            ("align-items", "center"),
            ("justify-content", "center"),
        ],
    );
    grid.set_inner_html(&format!("<p>{}</p>", FAILED_TO_LOAD));
}

fn build_controls(
    document: &web::Document,
) -> anyhow::Result<(web::HtmlElement, web::HtmlInputElement)> {
    let row: web::HtmlElement = dom::create(document, "div")?;
    dom::set_styles(
        &row,
        &[
            ("display", "flex"),
            ("align-items", "flex-end"),
            ("justify-content", "flex-end"),
            ("gap", "32px"),
            ("margin-top", &css_px(CONTROLS_MARGIN_PX)),
        ],
    );

    let slider: web::HtmlInputElement = dom::create(document, "input")?;
    slider.set_type("range");
    slider.set_min(&SLIDER_MIN.to_string());
    slider.set_max(&CONTRIBUTION_RADIUS_MAX.to_string());
    slider.set_step(&CONTRIBUTION_RADIUS_STEP.to_string());
    slider.set_value(&CONTRIBUTION_RADIUS.to_string());

    row.append_child(&slider).map_err(dom::js_err)?;
    Ok((row, slider))
}

fn wire_slider(
    slider: &web::HtmlInputElement,
    mount: &Mount<CellVisual, CellAdapter>,
) -> anyhow::Result<EventListener> {
    let slider_read = slider.clone();
    let pointer = mount.pointer.clone();
    EventListener::new(slider, "input", move |_| {
        let radius = snap_slider(
            slider_read.value_as_number() as f32,
            SLIDER_MIN,
            CONTRIBUTION_RADIUS_MAX,
            CONTRIBUTION_RADIUS_STEP,
        );
        pointer.set_radius(radius);
        log::debug!("[contributions] radius {}", pointer.radius().get());
    })
}
