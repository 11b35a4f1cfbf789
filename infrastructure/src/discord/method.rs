use domain::ports::discord::Method;

pub fn domain_to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Patch => reqwest::Method::PATCH,
    }
}
