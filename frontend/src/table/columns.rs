use leptos::View;
use std::rc::Rc;

type Accessor<R> = Rc<dyn Fn(&R) -> String>;
type CellRenderer<R> = Rc<dyn Fn(&R) -> View>;

/// Describes one table column. The controller never looks inside; it only
/// walks columns in order to turn records into rows.
pub struct Column<R> {
    pub id: &'static str,
    pub header: String,
    pub sort_key: Option<&'static str>,
    accessor: Option<Accessor<R>>,
    render: Option<CellRenderer<R>>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            header: self.header.clone(),
            sort_key: self.sort_key,
            accessor: self.accessor.clone(),
            render: self.render.clone(),
        }
    }
}

impl<R: 'static> Column<R> {
    /// Column showing `accessor`'s text for each record.
    pub fn data(
        id: &'static str,
        header: impl Into<String>,
        accessor: impl Fn(&R) -> String + 'static,
    ) -> Self {
        Self {
            id,
            header: header.into(),
            sort_key: None,
            accessor: Some(Rc::new(accessor)),
            render: None,
        }
    }

    /// Non-data column such as a row action slot.
    pub fn display(
        id: &'static str,
        header: impl Into<String>,
        render: impl Fn(&R) -> View + 'static,
    ) -> Self {
        Self {
            id,
            header: header.into(),
            sort_key: None,
            accessor: None,
            render: Some(Rc::new(render)),
        }
    }

    pub fn sortable(mut self, key: &'static str) -> Self {
        self.sort_key = Some(key);
        self
    }

    pub fn text(&self, record: &R) -> String {
        self.accessor
            .as_ref()
            .map(|accessor| accessor(record))
            .unwrap_or_default()
    }

    pub fn cell(&self, record: &R) -> Cell {
        match &self.render {
            Some(render) => Cell::Custom(render(record)),
            None => Cell::Text(self.text(record)),
        }
    }
}

pub enum Cell {
    Text(String),
    Custom(View),
}

pub fn yes_no(value: bool) -> String {
    let label = if value { "Yes" } else { "No" };
    label.to_string()
}
