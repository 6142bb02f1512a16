use crate::domain::app_connect::ui::AppConnectSettings;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Корневой компонент: страница интеграций с модальным окном настроек
/// App Store Connect.
#[component]
pub fn App() -> impl IntoView {
    let (show_settings, set_show_settings) = signal(false);
    // Есть ли уже сохранённое подключение: после первого сабмита секрет
    // повторно не запрашивается
    let (has_connection, set_has_connection) = signal(false);

    let open_settings = Callback::new(move |_: leptos::ev::MouseEvent| {
        set_show_settings.set(true);
    });

    let handle_saved = Callback::new(move |dto: contracts::domain::app_connect::AppConnectCredentialsDto| {
        // Отправка DTO наружному потоку сохранения остаётся за пределами формы
        log::info!("credentials submitted for key {}", dto.key_id);
        set_has_connection.set(true);
        set_show_settings.set(false);
    });

    let handle_cancel = Callback::new(move |_| {
        set_show_settings.set(false);
    });

    view! {
        <div class="page">
            <header class="page-header">
                <h1 class="page-header__title">"Integrations"</h1>
            </header>

            <div class="integration-card">
                <div class="integration-card__info">
                    <h3>"App Store Connect"</h3>
                    <p class="integration-card__status">
                        {move || if has_connection.get() {
                            "Connected"
                        } else {
                            "Not configured"
                        }}
                    </p>
                </div>
                <Button variant="secondary" on_click=open_settings>
                    {icon("settings")}
                    " Configure"
                </Button>
            </div>

            <Show when=move || show_settings.get()>
                <AppConnectSettings
                    existing=has_connection.get_untracked()
                    on_saved=handle_saved
                    on_cancel=handle_cancel
                />
            </Show>
        </div>
    }
}
