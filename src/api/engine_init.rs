use indexmap::IndexMap;

use crate::core::{AxisGeometry, DraggerId, validate_axis_geometry};
use crate::error::AxisResult;
use crate::interaction::{InteractionState, PanExtensionPolicy};

use super::validation::clamp_date_to_limits;
use super::{AxisEngine, AxisEngineConfig, Dragger, DraggerPair, SelectedDates};

impl AxisEngine {
    /// Creates a fully initialized engine and builds the first grid window
    /// around the selected dragger's date.
    pub fn new(config: AxisEngineConfig) -> AxisResult<Self> {
        let limits = config.limits.validate()?;
        let behavior = config.behavior.validate()?;
        let grid_widths = config.grid_widths.validate()?;
        let grid_width = grid_widths.for_scale(config.scale);
        validate_axis_geometry(config.axis_width, grid_width)?;

        let external = SelectedDates {
            primary: clamp_date_to_limits(limits, config.primary_date, "primary_date"),
            secondary: config
                .secondary_date
                .map(|date| clamp_date_to_limits(limits, date, "secondary_date")),
        };
        let selected = config.selected_dragger;
        let draggers = DraggerPair {
            primary: Dragger::new(
                external.date_for(DraggerId::Primary),
                selected == DraggerId::Primary,
            ),
            secondary: Dragger::new(
                external.date_for(DraggerId::Secondary),
                selected == DraggerId::Secondary,
            ),
        };

        let mut engine = Self {
            behavior,
            grid_widths,
            limits,
            scale: config.scale,
            has_subdaily_layers: config.has_subdaily_layers,
            range: Default::default(),
            geometry: AxisGeometry {
                grid_width,
                axis_width: config.axis_width,
                transform_x: 0.0,
                position: 0.0,
                midpoint: 0.0,
                left_bound: 0.0,
                right_bound: 0.0,
                visible_tile_count: 0.0,
                grid_number: 0,
                window_cells: 0,
                left_offset: 0.0,
            },
            pan_policy: PanExtensionPolicy::new(
                grid_width,
                0.0,
                behavior.extension_ratio,
                config.scale.is_materialized(),
            )?,
            sentinel: 0.0,
            draggers,
            selected,
            compare_mode_active: config.compare_mode_active,
            external,
            deferred_external: None,
            animation: None,
            interaction: InteractionState::default(),
            listeners: IndexMap::new(),
        };

        engine.rebuild_window(external.date_for(selected), behavior.initial_anchor_ratio)?;
        if config.animation_range.is_some() {
            engine.set_animation_range(config.animation_range)?;
        }
        Ok(engine)
    }
}
