use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{use_toaster, ErrorMessage};
use crate::context::use_user;
use crate::models::{category, Category, NewCar, NewCarErrors};
use crate::router::Route;
use crate::services::ApiClient;
use crate::utils::age::calc_age;
use crate::utils::masks::normalize_price;

/// Registration form for a new ad. Field values live in the DOM and are
/// read through node refs on submit; only the category options, the chosen
/// file name and the validation errors are component state.
#[function_component(CarRegister)]
pub fn car_register() -> Html {
    let categories = use_state(Vec::<Category>::new);
    let errors = use_state(NewCarErrors::default);
    let file_name = use_state(|| None::<String>);

    let navigator = use_navigator().expect("CarRegister rendered outside a router");
    let toaster = use_toaster();
    let user = use_user();

    let brand_ref = use_node_ref();
    let model_ref = use_node_ref();
    let version_ref = use_node_ref();
    let km_ref = use_node_ref();
    let year_ref = use_node_ref();
    let gear_ref = use_node_ref();
    let category_ref = use_node_ref();
    let price_ref = use_node_ref();
    let file_ref = use_node_ref();
    let description_ref = use_node_ref();

    // Categories load once per mount; the rest of the form never waits on
    // them, the select just stays empty until they arrive.
    {
        let categories = categories.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::new().get_categories().await {
                    Ok(mut loaded) => {
                        category::sort_by_id(&mut loaded);
                        log::info!("📋 Categories loaded: {}", loaded.len());
                        categories.set(loaded);
                    }
                    Err(e) => {
                        log::error!("❌ Error loading categories: {}", e);
                    }
                }
            });
            || ()
        });
    }

    // Live currency mask: every change to the price field is rewritten into
    // the BRL display form.
    let on_price_input = {
        let price_ref = price_ref.clone();
        Callback::from(move |_: InputEvent| {
            if let Some(input) = price_ref.cast::<HtmlInputElement>() {
                input.set_value(&normalize_price(&input.value()));
            }
        })
    };

    let on_file_change = {
        let file_name = file_name.clone();
        let file_ref = file_ref.clone();
        Callback::from(move |_: Event| {
            let name = file_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            file_name.set(name);
        })
    };

    let on_submit = {
        let errors = errors.clone();
        let navigator = navigator.clone();
        let toaster = toaster.clone();
        let user = user.clone();

        let brand_ref = brand_ref.clone();
        let model_ref = model_ref.clone();
        let version_ref = version_ref.clone();
        let km_ref = km_ref.clone();
        let year_ref = year_ref.clone();
        let gear_ref = gear_ref.clone();
        let category_ref = category_ref.clone();
        let price_ref = price_ref.clone();
        let file_ref = file_ref.clone();
        let description_ref = description_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let input_value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let select_value = |node: &NodeRef| {
                node.cast::<HtmlSelectElement>()
                    .map(|select| select.value())
                    .unwrap_or_default()
            };

            let file = file_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));

            let draft = NewCar {
                brand: input_value(&brand_ref),
                model: input_value(&model_ref),
                version: input_value(&version_ref),
                gear: select_value(&gear_ref),
                year: input_value(&year_ref),
                price: input_value(&price_ref),
                km: input_value(&km_ref),
                description: description_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
                category_id: select_value(&category_ref),
                has_file: file.is_some(),
            };

            // Invalid form: inline messages only, nothing leaves the browser
            let validation = draft.validate();
            if !validation.is_empty() {
                errors.set(validation);
                return;
            }
            errors.set(NewCarErrors::default());

            let Some(user_data) = user.user_data() else {
                // Route is guarded, so this only happens when the stored
                // session no longer deserializes
                toaster.error("Sessão expirada, entre novamente");
                navigator.push(&Route::Login);
                return;
            };

            let payload = match FormData::new() {
                Ok(payload) => payload,
                Err(_) => {
                    toaster.error("Falha no sistema, tente novamente");
                    return;
                }
            };

            let _ = payload.append_with_str("brand", &draft.brand);
            let _ = payload.append_with_str("model", &draft.model);
            let _ = payload.append_with_str("version", &draft.version);
            let _ = payload.append_with_str("gear", &draft.gear);
            let _ = payload.append_with_str("year", &draft.year);
            let _ = payload.append_with_str("price", &draft.price);
            let _ = payload.append_with_str("km", &draft.km);
            let _ = payload.append_with_str("description", &draft.description);
            let _ = payload.append_with_str("category_id", &draft.category_id);
            let _ = payload.append_with_str("user_name", &user_data.full_name());
            let _ = payload.append_with_str("user_email", &user_data.email);
            let _ = payload.append_with_str("user_number", &user_data.number);
            let _ = payload.append_with_str("user_state", &user_data.state);
            let _ = payload.append_with_str("user_city", &user_data.city);
            let _ = payload.append_with_str(
                "user_allow_show_email",
                &user_data.allow_show_email.to_string(),
            );
            if let Some(ref file) = file {
                let _ = payload.append_with_blob_and_filename("file", file, &file.name());
            }

            // Age gate: client-side only, checked before anything is sent.
            // An unparseable birth date blocks publication too.
            let age = calc_age(&user_data.birth_date);
            if age.map_or(true, |age| age < 18) {
                toaster.error("Você não pode anunciar porque é menor de idade");
                return;
            }

            toaster.loading("Anunciando");

            let brand = draft.brand.clone();
            let model = draft.model.clone();
            let navigator = navigator.clone();
            let toaster = toaster.clone();

            spawn_local(async move {
                match ApiClient::new().create_car(payload).await {
                    Ok(_) => {
                        toaster.remove_all();
                        toaster.success(&format!("{} {} anunciado com sucesso", brand, model));

                        let navigator = navigator.clone();
                        Timeout::new(1500, move || {
                            navigator.push(&Route::Home);
                        })
                        .forget();
                    }
                    Err(e) => {
                        // The form keeps its values; the user resubmits
                        log::error!("❌ Error publishing ad: {}", e);
                        toaster.remove_all();
                        toaster.error("Falha no sistema, tente novamente");
                    }
                }
            });
        })
    };

    html! {
        <div class="car-register">
            <div class="container-items">
                <h1>{"Anuncie seu Veículo"}</h1>

                <form onsubmit={on_submit}>
                    <span>
                        <label>{"Marca"}</label>
                        <input
                            type="text"
                            placeholder="Ex: Nissan"
                            class={classes!(errors.brand.is_some().then_some("input-error"))}
                            ref={brand_ref}
                        />
                        <ErrorMessage message={errors.brand.clone()} />
                    </span>

                    <span>
                        <label>{"Modelo"}</label>
                        <input
                            type="text"
                            placeholder="Ex: GT-R"
                            class={classes!(errors.model.is_some().then_some("input-error"))}
                            ref={model_ref}
                        />
                        <ErrorMessage message={errors.model.clone()} />
                    </span>

                    <span>
                        <label>{"Versão"}</label>
                        <input
                            type="text"
                            placeholder="Ex: Nismo"
                            class={classes!(errors.version.is_some().then_some("input-error"))}
                            ref={version_ref}
                        />
                        <ErrorMessage message={errors.version.clone()} />
                    </span>

                    <span>
                        <label>{"KM"}</label>
                        <input
                            type="number"
                            placeholder="Ex: 7.500"
                            class={classes!(errors.km.is_some().then_some("input-error"))}
                            ref={km_ref}
                        />
                        <ErrorMessage message={errors.km.clone()} />
                    </span>

                    <span>
                        <label>{"Ano"}</label>
                        <input
                            type="number"
                            placeholder="Ex: 2017"
                            class={classes!(errors.year.is_some().then_some("input-error"))}
                            ref={year_ref}
                        />
                        <ErrorMessage message={errors.year.clone()} />
                    </span>

                    <span>
                        <label>{"Câmbio"}</label>
                        <select
                            class={classes!(errors.gear.is_some().then_some("input-error"))}
                            ref={gear_ref}
                        >
                            <option value="">{"Escolha a transmissão"}</option>
                            <option value="Automático">{"Automático"}</option>
                            <option value="Manual">{"Manual"}</option>
                        </select>
                        <ErrorMessage message={errors.gear.clone()} />
                    </span>

                    <span>
                        <label>{"Categoria"}</label>
                        <select
                            class={classes!(errors.category_id.is_some().then_some("input-error"))}
                            ref={category_ref}
                        >
                            <option value="">{"Escolha a categoria"}</option>
                            { for categories.iter().map(|category| html! {
                                <option key={category.id.to_string()} value={category.id.to_string()}>
                                    { &category.name }
                                </option>
                            })}
                        </select>
                        <ErrorMessage message={errors.category_id.clone()} />
                    </span>

                    <span>
                        <label>{"Preço"}</label>
                        <div class={classes!(
                            "field-price",
                            errors.price.is_some().then_some("input-error")
                        )}>
                            <p>{"R$"}</p>
                            <input
                                type="tel"
                                placeholder="Ex: R$ 750.000,00"
                                ref={price_ref}
                                oninput={on_price_input}
                            />
                        </div>
                        <ErrorMessage message={errors.price.clone()} />
                    </span>

                    <span>
                        <label>{"Imagem"}</label>
                        <label class="label-upload">
                            {(*file_name)
                                .clone()
                                .unwrap_or_else(|| "Escolha uma imagem do veículo".to_string())}
                            <input
                                type="file"
                                accept="image/png, image/jpeg"
                                ref={file_ref}
                                onchange={on_file_change}
                            />
                        </label>
                        <ErrorMessage message={errors.file.clone()} />
                    </span>

                    <span>
                        <label>{"Descrição"}</label>
                        <textarea
                            placeholder="Escreva um pouco sobre o veículo"
                            class={classes!(errors.description.is_some().then_some("input-error"))}
                            ref={description_ref}
                        />
                        <ErrorMessage message={errors.description.clone()} />
                    </span>

                    <button type="submit" class="btn-primary">{"Anunciar"}</button>
                </form>
            </div>
        </div>
    }
}
