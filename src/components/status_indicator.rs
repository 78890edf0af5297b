use yew::prelude::*;

use crate::job_result::{decode_result_value, JobResult};

#[derive(Properties, PartialEq)]
pub struct StatusIndicatorProps {
    #[prop_or_default]
    pub result: AttrValue,
    #[prop_or_default]
    pub percentage: f64,
    #[prop_or_default]
    pub width: Option<AttrValue>,
    #[prop_or_default]
    pub height: Option<AttrValue>,
}

/// Width of the fill bar, in percent. Only the drawing is clamped.
pub fn fill_width(percentage: f64) -> f64 {
    if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    }
}

fn size_style(width: Option<&AttrValue>, height: Option<&AttrValue>) -> String {
    let mut style = String::new();
    if let Some(width) = width {
        style.push_str(&format!("width: {};", width));
    }
    if let Some(height) = height {
        style.push_str(&format!("height: {};", height));
    }
    style
}

#[function_component(StatusIndicator)]
pub fn status_indicator(props: &StatusIndicatorProps) -> Html {
    let result = decode_result_value(&props.result);
    let fill = fill_width(props.percentage);

    html! {
        <div
            class={classes!("status-indicator", format!("status-{}", result))}
            style={size_style(props.width.as_ref(), props.height.as_ref())}
            title={result.as_str()}
        >
            <div class="status-progress">
                <div class="status-progress-fill" style={format!("width: {:.1}%", fill)}></div>
            </div>
            if result != JobResult::Running {
                <span class="status-label">{ result.as_str() }</span>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_width_clamps_for_display() {
        assert_eq!(fill_width(42.5), 42.5);
        assert_eq!(fill_width(-10.0), 0.0);
        assert_eq!(fill_width(175.0), 100.0);
        assert_eq!(fill_width(f64::INFINITY), 100.0);
        assert_eq!(fill_width(f64::NAN), 0.0);
    }

    #[test]
    fn size_style_includes_only_given_dimensions() {
        let width = AttrValue::from("24px");
        assert_eq!(size_style(Some(&width), None), "width: 24px;");
        assert_eq!(size_style(None, None), "");
    }
}
