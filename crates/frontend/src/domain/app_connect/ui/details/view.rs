use super::credentials_step::CredentialsStep;
use crate::shared::components::ui::Button;
use crate::shared::modal::Modal;
use contracts::domain::app_connect::{AppConnectCredentials, AppConnectCredentialsDto};
use leptos::prelude::*;

/// Модальное окно настроек подключения App Store Connect.
///
/// Владеет записью учётных данных: шаг формы получает её как Signal и на
/// каждую правку возвращает замену через callback. Проверка обязательных
/// полей выполняется здесь при сохранении, сабмит наружу через `on_saved`;
/// отправка и хранение ключей не входят в эту форму.
#[component]
pub fn AppConnectSettings(
    /// Редактирование сохранённого подключения: секрет повторно не
    /// показывается, несменённый ключ допустим при сохранении
    #[prop(optional)]
    existing: bool,
    on_saved: Callback<AppConnectCredentialsDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    // Запись создаётся владельцем до показа шага и живёт в этом сигнале;
    // шаг формы своей копии не держит
    let credentials = RwSignal::new(AppConnectCredentials::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let handle_change = Callback::new(move |next: AppConnectCredentials| {
        log::debug!("app connect credentials edited");
        credentials.set(next);
    });

    let handle_save = Callback::new(move |_: leptos::ev::MouseEvent| {
        let current = credentials.get();
        if let Err(message) = current.validate(existing) {
            log::warn!("app connect credentials rejected: {message}");
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);

        let dto = AppConnectCredentialsDto::from(current);
        log::info!("app connect credentials accepted for issuer {}", dto.issuer);
        on_saved.run(dto);
    });

    view! {
        <Modal
            title="App Store Connect"
            on_close=Callback::new(move |_| on_cancel.run(()))
        >
            {move || error.get().map(|message| view! {
                <div class="form__error">{message}</div>
            })}

            <CredentialsStep
                credentials=credentials
                on_change=handle_change
            />

            <div class="modal-footer">
                <Button on_click=handle_save>
                    "Save"
                </Button>
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| on_cancel.run(()))
                >
                    "Cancel"
                </Button>
            </div>
        </Modal>
    }
}
