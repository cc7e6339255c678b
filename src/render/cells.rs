use super::helpers::{css_px, css_translate};
use crate::constants::{CELL_ID_PREFIX, COLOR_TRANSITION};
use crate::dom;
use fnv::FnvHashMap;
use folio_core::render::cell_color;
use folio_core::{CellKey, CellVisual, Entity, RenderAdapter, RenderError, Theme};
use glam::Vec2;
use web_sys as web;

/// Calendar cells as absolutely positioned `div`s inside a grid host.
///
/// Each frame writes a translate transform and a ramp color. Cells whose
/// node has gone missing are skipped.
pub struct CellAdapter {
    host: web::HtmlElement,
    cell_size: f32,
    cells: FnvHashMap<CellKey, web::HtmlElement>,
}

impl CellAdapter {
    pub fn new(host: web::HtmlElement, cell_size: f32) -> Self {
        Self {
            host,
            cell_size,
            cells: FnvHashMap::default(),
        }
    }

    /// Replaces the host's cells with one node per entity.
    pub fn mount(
        &mut self,
        document: &web::Document,
        entities: &[Entity<CellVisual>],
        extent: Vec2,
        theme: Theme,
    ) -> anyhow::Result<()> {
        self.unmount();
        self.host.set_inner_html("");
        dom::set_styles(
            &self.host,
            &[
                ("position", "relative"),
                ("width", &css_px(extent.x)),
                ("height", &css_px(extent.y)),
            ],
        );

        let size = css_px(self.cell_size);
        let half = self.cell_size * 0.5;
        for entity in entities {
            let key = entity.visual.key;
            let el: web::HtmlElement = dom::create(document, "div")?;
            el.set_id(&format!("{}{}", CELL_ID_PREFIX, key));
            let rest = entity.rest();
            let color = cell_color(entity.visual.count, entity.activated, theme).to_hex();
            dom::set_styles(
                &el,
                &[
                    ("position", "absolute"),
                    ("left", &css_px(rest.x - half)),
                    ("top", &css_px(rest.y - half)),
                    ("width", &size),
                    ("height", &size),
                    ("border-radius", "9999px"),
                    ("transition", COLOR_TRANSITION),
                    ("will-change", "transform"),
                    ("background-color", &color),
                ],
            );
            self.host.append_child(&el).map_err(dom::js_err)?;
            self.cells.insert(key, el);
        }
        log::debug!("[cells] mounted {} cells", self.cells.len());
        Ok(())
    }

    pub fn unmount(&mut self) {
        for (_, el) in self.cells.drain() {
            el.remove();
        }
    }
}

impl Drop for CellAdapter {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl RenderAdapter<CellVisual> for CellAdapter {
    fn target_ready(&self, entity: &Entity<CellVisual>) -> bool {
        self.cells
            .get(&entity.visual.key)
            .is_some_and(|el| el.is_connected())
    }

    fn render(&mut self, entity: &Entity<CellVisual>, theme: Theme) -> Result<(), RenderError> {
        let key = entity.visual.key;
        let el = self
            .cells
            .get(&key)
            .ok_or_else(|| RenderError::TargetUnavailable(format!("{}{}", CELL_ID_PREFIX, key)))?;
        let color = cell_color(entity.visual.count, entity.activated, theme);
        let style = el.style();
        _ = style.set_property("transform", &css_translate(entity.offset));
        _ = style.set_property("background-color", &color.to_hex());
        Ok(())
    }
}
