use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::{ChartEngineConfig, ChartStyle};

pub(super) fn validate_viewport(viewport: Viewport) -> ChartResult<Viewport> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

pub(super) fn validate_chart_style(style: ChartStyle) -> ChartResult<ChartStyle> {
    style.invested_fill.validate()?;
    style.total_fill.validate()?;
    style.line_color.validate()?;
    style.cursor_color.validate()?;
    for (name, width) in [
        ("line width", style.line_width),
        ("cursor width", style.cursor_width),
    ] {
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and > 0"
            )));
        }
    }
    Ok(style)
}

pub(super) fn validate_engine_config(config: ChartEngineConfig) -> ChartResult<ChartEngineConfig> {
    validate_viewport(config.viewport)?;
    config.animation.validate()?;
    validate_chart_style(config.style)?;
    if !config.empty_scale_ceiling.is_finite() || config.empty_scale_ceiling <= 0.0 {
        return Err(ChartError::InvalidData(
            "empty scale ceiling must be finite and > 0".to_owned(),
        ));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{validate_chart_style, validate_engine_config, validate_viewport};
    use crate::api::{ChartEngineConfig, ChartStyle};
    use crate::core::Viewport;
    use crate::render::Color;

    #[test]
    fn viewport_validation_rejects_zero_width() {
        let err = validate_viewport(Viewport::new(0.0, 10.0)).expect_err("zero width must fail");
        assert!(format!("{err}").contains("invalid viewport"));
    }

    #[test]
    fn style_validation_rejects_out_of_range_color() {
        let style = ChartStyle {
            line_color: Color::rgb(1.5, 0.0, 0.0),
            ..ChartStyle::default()
        };
        let err = validate_chart_style(style).expect_err("color must fail");
        assert!(format!("{err}").contains("color channel"));
    }

    #[test]
    fn style_validation_rejects_zero_cursor_width() {
        let style = ChartStyle {
            cursor_width: 0.0,
            ..ChartStyle::default()
        };
        let err = validate_chart_style(style).expect_err("width must fail");
        assert!(format!("{err}").contains("cursor width"));
    }

    #[test]
    fn config_validation_rejects_zero_empty_ceiling() {
        let config = ChartEngineConfig::new(Viewport::new(100.0, 50.0)).with_empty_scale_ceiling(0.0);
        let err = validate_engine_config(config).expect_err("ceiling must fail");
        assert!(format!("{err}").contains("empty scale ceiling"));
    }
}
