use rstest::*;
use tablekit::prelude::*;

#[derive(Debug, Clone)]
struct Task {
	title: String,
	done: bool,
}

#[fixture]
fn tasks() -> Vec<Task> {
	["write docs", "fix pager", "ship"]
		.into_iter()
		.enumerate()
		.map(|(i, title)| Task {
			title: title.to_string(),
			done: i % 2 == 0,
		})
		.collect()
}

fn task_columns(table: &mut Table<Task>) -> Result<(), TableError> {
	table
		.add_column(
			Column::new("Title", |t: &Task| t.title.clone())
				.sort_by(|t: &Task| t.title.clone())
				.search(|t: &Task, term: &str| t.title.contains(term))
				.default_sort(),
		)?
		.add_column(Column::new("Done", |t: &Task| if t.done { "yes" } else { "no" }))?;
	Ok(())
}

#[rstest]
fn test_prelude_renders_from_http_request(tasks: Vec<Task>) {
	// Arrange
	let request = http::Request::builder()
		.uri("/tasks?todo-searchCol=0&todo-searchBy=pager")
		.header(http::header::HOST, "tasks.example")
		.body(())
		.unwrap();

	// Act
	let html = tablekit::table(&request, Some("todo"), tasks, task_columns).unwrap();

	// Assert
	assert!(html.as_str().contains("<td>fix pager</td>"));
	assert!(!html.as_str().contains("<td>ship</td>"));
	assert!(html.as_str().contains(r#"action="http://tasks.example/tasks""#));
}

#[rstest]
fn test_facade_modules_expose_crates(tasks: Vec<Task>) {
	// Arrange
	let mut table = Table::new();
	task_columns(&mut table).unwrap();
	table.attributes(tablekit::html::Attributes::from([("class", "table-hover")]));
	let request = tablekit::urls::RequestUrl::parse("http://localhost/tasks?sortOrder=desc&sortBy=0").unwrap();

	// Act
	let html = table.render(tasks, &request).unwrap();
	let markup = html.as_str();

	// Assert
	assert!(markup.contains(r#"<table class="table table-hover">"#));
	assert!(markup.find("write docs") < markup.find("ship"));
	assert!(markup.find("ship") < markup.find("fix pager"));
	assert_eq!(
		tablekit::tables::ParamNames::new(Some("todo")).take,
		"todo-take"
	);
}
