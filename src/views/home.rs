use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{CarCard, ModalDescription};
use crate::models::Car;
use crate::services::ApiClient;

/// Public listing page. Every published ad, newest first as the API answers,
/// with the description modal on top when a card is opened.
#[function_component(Home)]
pub fn home() -> Html {
    let cars = use_state(Vec::<Car>::new);
    let loading = use_state(|| true);
    let selected = use_state(|| None::<Car>);

    {
        let cars = cars.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::new().get_cars().await {
                    Ok(fetched) => {
                        log::info!("📋 Ads loaded: {}", fetched.len());
                        cars.set(fetched);
                    }
                    Err(e) => {
                        log::error!("❌ Error loading ads: {}", e);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let open_modal = {
        let selected = selected.clone();
        Callback::from(move |car: Car| selected.set(Some(car)))
    };

    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let set_cars = {
        let cars = cars.clone();
        Callback::from(move |updated: Vec<Car>| cars.set(updated))
    };

    html! {
        <div class="home">
            <h1>{"Anúncios"}</h1>

            {if *loading {
                html! { <p class="empty-list">{"Carregando anúncios..."}</p> }
            } else if cars.is_empty() {
                html! { <p class="empty-list">{"Nenhum anúncio publicado ainda"}</p> }
            } else {
                html! {
                    <div class="car-grid">
                        { for cars.iter().map(|car| html! {
                            <CarCard
                                key={car.id.to_string()}
                                car={car.clone()}
                                on_open={open_modal.clone()}
                            />
                        })}
                    </div>
                }
            }}

            {if let Some(car) = (*selected).clone() {
                html! {
                    <ModalDescription
                        car={car}
                        filtered_cars={(*cars).clone()}
                        set_cars={set_cars}
                        close_modal={close_modal}
                        my_ads={false}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}
