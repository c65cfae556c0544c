use taskit_model::Snapshot;
use yew::prelude::*;

use super::TaskRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub tasks: Snapshot,
}

/// One [`TaskRow`] per task, in sequence order, keyed by position.
#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    html! {
        <div class="task-list">
            {for props.tasks.iter().enumerate().map(|(index, task)| html! {
                <TaskRow key={index} task={task.clone()} />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use taskit_model::{Task, TaskSequence, TaskStore};

    use super::*;
    use crate::testing::render;

    fn rows(html: &str) -> Vec<&str> {
        html.split("<p>")
            .skip(1)
            .filter_map(|rest| rest.split("</p>").next())
            .collect()
    }

    #[tokio::test]
    async fn empty_sequence_renders_no_rows() {
        let html = render::<TaskList>(|| TaskListProps {
            tasks: TaskSequence::new().snapshot(),
        }).await;

        assert!(html.contains(r#"class="task-list""#), "{html}");
        assert!(rows(&html).is_empty(), "{html}");
    }

    #[tokio::test]
    async fn rows_follow_sequence_order_with_duplicates() {
        let html = render::<TaskList>(|| {
            let store = TaskStore::seeded();
            store.append("Buy milk");
            store.append("Call doctor");
            TaskListProps { tasks: store.snapshot() }
        }).await;

        assert_eq!(
            rows(&html),
            ["Call doctor", "Meet with lawyer", "Buy groceries", "Buy milk", "Call doctor"],
        );
    }

    #[tokio::test]
    async fn rendering_is_repeatable() {
        let make = || TaskListProps {
            tasks: [Task::from("b"), Task::from("a"), Task::from("b")].as_slice().into(),
        };

        let first = render::<TaskList>(make).await;
        let second = render::<TaskList>(make).await;

        assert_eq!(first, second);
        assert_eq!(rows(&first), ["b", "a", "b"]);
    }
}
