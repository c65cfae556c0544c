use taskit_model::Draft;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::log;

pub struct AddTask {
    draft: Draft,
}

#[derive(Properties, PartialEq)]
pub struct AddTaskProps {
    /// Receives the trimmed text of every non-blank submission.
    pub onadd: Callback<String>,
}

pub enum AddTaskMsg {
    Change(String),
    Submit,
}

impl Component for AddTask {
    type Message = AddTaskMsg;
    type Properties = AddTaskProps;

    fn create(_: &Context<Self>) -> Self {
        AddTask {
            draft: Draft::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: AddTaskMsg) -> bool {
        match msg {
            AddTaskMsg::Change(value) => {
                self.draft.set(value);
                true
            }
            AddTaskMsg::Submit => {
                let Some(task) = self.draft.submit() else {
                    log!("blank task, not submitting");
                    return false;
                };

                ctx.props().onadd.emit(task);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            AddTaskMsg::Change(input.value())
        });

        // enter in the field submits the form; keep the browser from navigating
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            AddTaskMsg::Submit
        });

        html! {
            <form class="add-task" {onsubmit}>
                <input
                    class="task-input"
                    type="text"
                    placeholder="New task..."
                    enterkeyhint="done"
                    value={self.draft.value().to_owned()}
                    {oninput}
                />
                <button class="add-button" type="submit">{"Add Task"}</button>
            </form>
        }
    }
}
