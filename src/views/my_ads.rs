use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{CarCard, ModalDescription};
use crate::context::use_user;
use crate::models::Car;
use crate::router::Route;
use crate::services::ApiClient;

/// The signed-in user's own ads. Same grid as the home page, but the modal
/// opens with the owner actions (edit/delete) instead of the contact link.
#[function_component(MyAds)]
pub fn my_ads() -> Html {
    let user = use_user();
    let navigator = use_navigator().expect("MyAds rendered outside a router");

    let cars = use_state(Vec::<Car>::new);
    let loading = use_state(|| true);
    let selected = use_state(|| None::<Car>);

    let user_email = user.user_data().map(|u| u.email).unwrap_or_default();

    {
        let cars = cars.clone();
        let loading = loading.clone();
        let user_email = user_email.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::new().get_cars().await {
                    Ok(fetched) => {
                        let mine: Vec<Car> = fetched
                            .into_iter()
                            .filter(|car| car.user_email == user_email)
                            .collect();
                        log::info!("📋 Own ads loaded: {}", mine.len());
                        cars.set(mine);
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

    let update_vehicle = {
        let navigator = navigator.clone();
        Callback::from(move |car: Car| {
            // TODO: carry the ad into the register view once it accepts an
            // initial draft; today the owner retypes the fields
            log::info!("✏️ Edit requested for ad {}", car.id);
            navigator.push(&Route::CarRegister);
        })
    };

    html! {
        <div class="my-ads">
            <h1>{"Meus Anúncios"}</h1>

            {if *loading {
                html! { <p class="empty-list">{"Carregando anúncios..."}</p> }
            } else if cars.is_empty() {
                html! { <p class="empty-list">{"Você ainda não anunciou nenhum veículo"}</p> }
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
                        my_ads={true}
                        update_vehicle={update_vehicle}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}
