use crate::assets;
use crate::i18n::use_language;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let snap = use_language().snapshot();
    let cat = snap.catalogue;

    html! {
        <footer role="contentinfo" class="footer">
            <div class="footer-brand">
                <span class="brand-first">{ &cat.nav.brand_first }</span>
                {" "}
                <span class="brand-last">{ &cat.nav.brand_last }</span>
            </div>
            <ul class="footer-social">
                <li><a href={assets::GITHUB_URL} target="_blank" rel="noreferrer">{ "GitHub" }</a></li>
                <li><a href={assets::LINKEDIN_URL} target="_blank" rel="noreferrer">{ "LinkedIn" }</a></li>
                <li><a href={assets::TELEGRAM_URL} target="_blank" rel="noreferrer">{ "Telegram" }</a></li>
                <li><a href={format!("mailto:{}", assets::EMAIL)}>{ "Email" }</a></li>
            </ul>
            <p class="footer-copy">
                { format!("© {} {}. {}", cat.footer.year, cat.hero.name, cat.footer.copyright) }
            </p>
            <p class="footer-made">{ &cat.footer.made_with }</p>
        </footer>
    }
}
