use taskit_model::{Snapshot, SubscribeHandle, TaskStore};
use yew::prelude::*;

use crate::components::{AddTask, Footer, Header, TaskList};

/// Root of the page. Owns the task store and hands snapshots of it down to
/// the list; the add form reports back through a callback.
pub struct App {
    store: TaskStore,
    tasks: Snapshot,
    _handle: SubscribeHandle,
}

pub enum AppEvent {
    AddTask(String),
    TasksChanged(Snapshot),
}

impl Component for App {
    type Message = AppEvent;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let store = TaskStore::seeded();

        let tasks_changed = ctx.link().callback(AppEvent::TasksChanged);
        let handle = store.subscribe(move |tasks| tasks_changed.emit(tasks));

        App {
            tasks: store.snapshot(),
            store,
            _handle: handle,
        }
    }

    fn update(&mut self, _: &Context<Self>, msg: AppEvent) -> bool {
        match msg {
            AppEvent::AddTask(task) => {
                // re-render happens once the store reports the new snapshot
                if !self.store.append(task) {
                    crate::log!("ignoring empty task");
                }
                false
            }
            AppEvent::TasksChanged(tasks) => {
                crate::log!("task list now has {} entries", tasks.len());
                self.tasks = tasks;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                <Header />
                <main>
                    <AddTask onadd={ctx.link().callback(AppEvent::AddTask)} />
                    <TaskList tasks={self.tasks.clone()} />
                </main>
                <Footer />
            </div>
        }
    }
}
