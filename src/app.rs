use crate::components::running_status_indicator::RunningStatusIndicator;
use crate::job_result::JobResult;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

const DEMO_DURATION_MILLIS: u32 = 10_000;

pub struct App {
    result: JobResult,
    start_time: Option<f64>,
    finish: Option<Timeout>,
    logs: Vec<String>,
}

pub enum Msg {
    StartJob,
    FinishJob,
    AbortJob,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            result: JobResult::Queued,
            start_time: None,
            finish: None,
            logs: vec!["Job queued".to_string()],
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StartJob => {
                self.result = JobResult::Running;
                self.start_time = Some(js_sys::Date::now());

                // Finish a little after the estimate so the indicator saturates first
                let link = ctx.link().clone();
                self.finish = Some(Timeout::new(DEMO_DURATION_MILLIS + 1500, move || {
                    link.send_message(Msg::FinishJob);
                }));
                self.add_log("Job started");
                true
            }
            Msg::FinishJob => {
                self.finish = None;
                self.result = JobResult::Success;
                self.add_log("Job finished");
                true
            }
            Msg::AbortJob => {
                self.finish = None;
                self.result = JobResult::Aborted;
                self.add_log("Job aborted");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let running = self.result.is_running();

        html! {
            <div class="app-container">
                <header>
                    <h1>{ "Status Indicators" }</h1>
                </header>

                <main>
                    <div class="panel">
                        <h2>{ "Job" }</h2>
                        <RunningStatusIndicator
                            result={self.result.as_str()}
                            start_time={self.start_time}
                            estimated_duration={f64::from(DEMO_DURATION_MILLIS)}
                            width="48px"
                            height="48px"
                        />

                        <div class="button-container">
                            <button
                                onclick={ctx.link().callback(|_| Msg::StartJob)}
                                disabled={running}
                            >
                                { "Start" }
                            </button>
                            <button
                                onclick={ctx.link().callback(|_| Msg::AbortJob)}
                                disabled={!running}
                            >
                                { "Abort" }
                            </button>
                        </div>

                        <div class="logs-container">
                            {
                                for self.logs.iter().map(|log| {
                                    html! { <div class="log-entry">{ log }</div> }
                                })
                            }
                        </div>
                    </div>

                    <div class="panel">
                        <h2>{ "All results" }</h2>
                        {
                            for JobResult::ALL.iter().map(|result| {
                                html! {
                                    <RunningStatusIndicator
                                        result={result.as_str()}
                                        estimated_duration={60_000.0}
                                        width="24px"
                                        height="24px"
                                    />
                                }
                            })
                        }
                    </div>
                </main>
            </div>
        }
    }
}

impl App {
    fn add_log(&mut self, message: &str) {
        let timestamp = js_sys::Date::new_0().to_locale_time_string("en-US");
        self.logs.push(format!("[{}] {}", timestamp, message));
    }
}
