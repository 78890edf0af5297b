use gloo::console::log;
use gloo::timers::callback::Interval;
use yew::prelude::*;

use super::status_indicator::StatusIndicator;
use crate::job_result::decode_result_value;
use crate::progress::{ProgressTracker, Tick, TrackingConfig, TICK_MILLIS};

/// Properties for [`RunningStatusIndicator`].
///
/// `estimated_duration` is the time in millis over which the indicator fills
/// up, and `start_time` the epoch millis progress is tracked from.
#[derive(Properties, PartialEq)]
pub struct RunningStatusIndicatorProps {
    #[prop_or_default]
    pub result: AttrValue,
    #[prop_or_default]
    pub start_time: Option<f64>,
    #[prop_or_default]
    pub estimated_duration: Option<f64>,
    #[prop_or_default]
    pub width: Option<AttrValue>,
    #[prop_or_default]
    pub height: Option<AttrValue>,
    #[prop_or(TICK_MILLIS)]
    pub tick_millis: u32,
}

impl RunningStatusIndicatorProps {
    fn tracking_config(&self) -> TrackingConfig {
        TrackingConfig {
            result: decode_result_value(&self.result),
            start_time: self.start_time,
            estimated_duration: self.estimated_duration,
        }
    }
}

pub enum Msg {
    Tick,
}

/// A [`StatusIndicator`] whose percentage updates itself while the job is
/// running.
pub struct RunningStatusIndicator {
    tracker: ProgressTracker<Interval>,
}

impl Component for RunningStatusIndicator {
    type Message = Msg;
    type Properties = RunningStatusIndicatorProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut indicator = Self {
            tracker: ProgressTracker::new(),
        };
        indicator.initialize_progress(ctx);
        indicator
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Tick => {
                let outcome = self.tracker.tick(now_millis());
                Self::report(outcome)
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.initialize_progress(ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <StatusIndicator
                result={props.result.clone()}
                percentage={self.tracker.percentage()}
                width={props.width.clone()}
                height={props.height.clone()}
            />
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.tracker.stop();
    }
}

impl RunningStatusIndicator {
    fn initialize_progress(&mut self, ctx: &Context<Self>) {
        let props = ctx.props();
        let config = props.tracking_config();
        let period = props.tick_millis;
        let link = ctx.link().clone();

        let outcome = self.tracker.reconfigure(Some(&config), now_millis(), move || {
            Interval::new(period, move || link.send_message(Msg::Tick))
        });

        if let Some(start) = self.tracker.start_time_millis() {
            log!(format!(
                "Tracking progress from {} over {:?} ms",
                start, config.estimated_duration
            ));
        }
        Self::report(outcome);
    }

    fn report(outcome: Tick) -> bool {
        match outcome {
            Tick::Idle => false,
            Tick::Advanced(_) => true,
            Tick::Completed(percentage) => {
                log!(format!("Progress complete at {:.1}%", percentage));
                true
            }
        }
    }
}

fn now_millis() -> f64 {
    js_sys::Date::now()
}
