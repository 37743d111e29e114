use super::cli::get_app;

#[test]
fn can_build_app_with_subcommands() {
    let app = get_app();

    let names = app.get_subcommands().map(|command| command.get_name().to_string()).collect::<Vec<_>>();

    assert_eq!(names, vec!["check", "convert"]);
    app.debug_assert();
}
