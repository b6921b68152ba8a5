use phish_quiz::TrainerApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Phishing Awareness Trainer",
        options,
        Box::new(|cc| {
            // Restaura la app guardada, o arranca de cero
            let app = cc
                .storage
                .and_then(|storage| eframe::get_value::<TrainerApp>(storage, eframe::APP_KEY))
                .unwrap_or_else(TrainerApp::new);
            Ok(Box::new(app))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirige los mensajes de `log` a console.log
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No hay window")
            .document()
            .expect("No hay document");

        let canvas = document
            .get_element_by_id("phish_quiz_canvas")
            .expect("No se encontró el canvas phish_quiz_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("El elemento no es un canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    let app = cc
                        .storage
                        .and_then(|storage| {
                            eframe::get_value::<TrainerApp>(storage, eframe::APP_KEY)
                        })
                        .unwrap_or_else(TrainerApp::new);
                    Ok(Box::new(app))
                }),
            )
            .await
            .expect("No se pudo arrancar eframe en el canvas");
    });
}
