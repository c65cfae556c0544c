use taskit_model::Task;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
    pub task: Task,
}

#[function_component(TaskRow)]
pub fn task_row(props: &TaskRowProps) -> Html {
    html! {
        <div class="task">
            <p>{props.task.text()}</p>
        </div>
    }
}
