//! Build a router configuration form and print its HTML.
//!
//! Run with: cargo run -p formar --example router_config_form

use std::rc::Rc;

use formar::prelude::*;

fn main() -> FormarResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let root = Element::new("body");
    let form = Element::new("form");
    form.set_attr("id", FORM_ID);
    root.append_child(&form);

    let inputs = init_form(&root)?;

    let general = make_section(&inputs, "General");
    append_text(&general, &TextField::new("Name", "name", "www"));
    append_number(&general, &NumberField::new("Port", "port", 80));

    let ssl = make_section(&inputs, "SSL");
    append_checkbox(&ssl, &CheckboxField::new("Enabled", "ssl.enabled", false));
    append_number(&ssl, &NumberField::new("Port", "ssl.port", 443));
    append_password(&ssl, &PasswordField::new(
        "Keystore Password",
        "ssl.keystore_password",
        "",
    ));

    // TLS versions read as one logical value.
    let tls = Element::new("div");
    tls.set_attr("id", "tls");
    tls.add_class(MULTI_SELECT_CLASS);
    ssl.append_child(&tls);
    for version in ["TLSv1.2", "TLSv1.3"] {
        let checkbox = append_checkbox(&tls, &CheckboxField::new(version, version, true));
        checkbox.set_attr("value", version);
    }

    let hostnames = make_multi_container(&inputs, "Hostnames");
    let entry = make_multi_container_entry(&hostnames);
    append_text(&entry, &TextField::new("Hostname", "hostnames[0]", "example.com"));

    initialize_multi_select_listeners(&root, Rc::new(LogSink));

    // Simulate a user unchecking TLSv1.2; the selection is reported via LogSink.
    let checkbox = tls
        .query(&Selector::input_type("checkbox"))
        .ok_or_else(|| FormarError::MissingElement {
            selector: Selector::input_type("checkbox").to_string(),
        })?;
    checkbox.set_checked(false);
    checkbox.dispatch(EventType::Change);

    println!("{}", root.to_html());
    Ok(())
}
