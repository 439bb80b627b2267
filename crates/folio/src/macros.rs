#[macro_export]
/// Allow defining an async callback that can be used in Yew components.
/// The listed variables are cloned once into the callback and again into every
/// spawned task, so the body can freely move them into `async` code.
///
/// 1. Without an event parameter:
/// ```compile_fail
/// let reload = async_callback!([service, projects, loading] {
///     loading.set(true);
///     projects.set(folio::gallery::load_projects(&*service).await);
///     loading.set(false);
/// });
/// ```
///
/// 2. With an event parameter. The body runs on a later tick, so anything that must
/// happen during dispatch (such as `prevent_default`) does not belong here:
/// ```compile_fail
/// let on_delete = async_callback!([service, prompter, token, id] |_event| {
///     let _ = folio::dashboard::delete_project(&*service, &prompter, &token, &id).await;
/// });
/// ```
macro_rules! async_callback {
    // Version with event parameter, matched first since a closure is also an `expr`
    ([$($var:ident),* $(,)?] |$event:ident| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    // Version without event parameter
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
