use yew::prelude::*;

use crate::models::Car;

#[derive(Properties, PartialEq)]
pub struct CarCardProps {
    pub car: Car,
    pub on_open: Callback<Car>,
}

/// Listing card. The detail itself lives in the modal; the card only shows
/// enough to pick an ad.
#[function_component(CarCard)]
pub fn car_card(props: &CarCardProps) -> Html {
    let car = &props.car;

    let on_open = {
        let on_open = props.on_open.clone();
        let car = car.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(car.clone()))
    };

    html! {
        <div class="car-card">
            {if let Some(ref image_url) = car.image_url {
                html! { <img src={image_url.clone()} alt={format!("{} {}", car.brand, car.model)} /> }
            } else {
                html! { <div class="car-card-no-image">{"Sem foto"}</div> }
            }}
            <h3>{ format!("{} {} {}", car.brand, car.model, car.year) }</h3>
            <p class="car-version">{ &car.version }</p>
            <p class="car-price">{ format!("R$ {}", car.price) }</p>
            <p class="car-km">{ format!("{} km", car.km) }</p>
            <button class="btn-primary" onclick={on_open}>{"Ver descrição"}</button>
        </div>
    }
}
