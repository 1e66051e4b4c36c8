use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use super::toaster::use_toaster;
use super::Loading;
use crate::models::{remove_car_by_id, Car};
use crate::services::ApiClient;
use crate::utils::contact::whatsapp_link;

#[derive(Properties, PartialEq)]
pub struct ModalDescriptionProps {
    /// The ad on display.
    pub car: Car,
    /// The caller's current (possibly filtered) list. The modal never keeps
    /// it; on delete it hands a filtered copy back through `set_cars`.
    pub filtered_cars: Vec<Car>,
    pub set_cars: Callback<Vec<Car>>,
    pub close_modal: Callback<()>,
    /// Whether the viewer authored this ad. Supplied by the caller; the
    /// server re-checks ownership on every mutation.
    #[prop_or_default]
    pub my_ads: bool,
    /// Invoked with the ad record when the owner starts an edit.
    #[prop_or_default]
    pub update_vehicle: Callback<Car>,
}

#[function_component(ModalDescription)]
pub fn modal_description(props: &ModalDescriptionProps) -> Html {
    let deleting = use_state(|| false);
    let toaster = use_toaster();

    let on_delete = {
        let deleting = deleting.clone();
        let toaster = toaster.clone();
        let car_id = props.car.id;
        let filtered_cars = props.filtered_cars.clone();
        let set_cars = props.set_cars.clone();
        let close_modal = props.close_modal.clone();

        Callback::from(move |_: MouseEvent| {
            let confirmed = window()
                .and_then(|win| {
                    win.confirm_with_message(
                        "Você realmente quer deletar este anúncio?\n\nNão será possível reverter isso",
                    )
                    .ok()
                })
                .unwrap_or(false);

            if !confirmed {
                return;
            }

            deleting.set(true);

            let deleting = deleting.clone();
            let toaster = toaster.clone();
            let filtered_cars = filtered_cars.clone();
            let set_cars = set_cars.clone();
            let close_modal = close_modal.clone();

            spawn_local(async move {
                match ApiClient::new().delete_car(car_id).await {
                    Ok(()) => {
                        close_modal.emit(());
                        set_cars.emit(remove_car_by_id(&filtered_cars, car_id));
                        deleting.set(false);
                        toaster.success("Seu anúncio foi deletado");
                    }
                    Err(e) => {
                        // Failed delete: the list stays as it was and the
                        // detail view comes back so the user can retry.
                        log::error!("❌ Error deleting ad {}: {}", car_id, e);
                        deleting.set(false);
                        toaster.error("Não foi possível deletar o anúncio, tente novamente");
                    }
                }
            });
        })
    };

    let on_edit = {
        let update_vehicle = props.update_vehicle.clone();
        let car = props.car.clone();
        Callback::from(move |_: MouseEvent| update_vehicle.emit(car.clone()))
    };

    let on_close = props.close_modal.reform(|_: MouseEvent| ());

    let car = &props.car;

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={on_close.clone()}></div>
            {if !*deleting {
                html! {
                    <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <div class="modal-header">
                            <h2>{ format!("Descrição {} {} {}", car.brand, car.model, car.year) }</h2>
                            <button class="btn-close" onclick={on_close}>{"✕"}</button>
                        </div>

                        <p class="description">{ &car.description }</p>
                        <p class="advertiser">
                            {"Anunciado por "}
                            <span class="advertiser-name">{ &car.user_name }</span>
                        </p>
                        {if car.user_allow_show_email {
                            html! {
                                <p class="advertiser-email">
                                    { format!("E-mail do anunciante: {}", car.user_email) }
                                </p>
                            }
                        } else {
                            html! {}
                        }}

                        {if !props.my_ads {
                            html! {
                                <a
                                    href={whatsapp_link(&car.user_number, &car.model)}
                                    target="_blank"
                                    rel="noreferrer"
                                >
                                    <button class="btn-primary">{"Entrar em contato"}</button>
                                </a>
                            }
                        } else {
                            html! {
                                <div class="personal-ad-buttons">
                                    <button class="btn-primary" onclick={on_edit}>{"Editar"}</button>
                                    <button class="btn-danger" onclick={on_delete}>{"Deletar"}</button>
                                </div>
                            }
                        }}
                    </div>
                }
            } else {
                html! { <Loading /> }
            }}
        </div>
    }
}
