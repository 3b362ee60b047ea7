// The whole query surface of the service. Each entry binds one GET path to
// one fixed aggregation over the `supermarket` table; none of the statements
// take parameters. Column aliases (and the lack of them) are part of the
// client contract, so expressions stay unaliased where the dashboard expects
// keys like "SUM(quantity)".
pub struct Endpoint {
    pub path: &'static str,
    pub sql: &'static str,
}

pub static ENDPOINTS: &[Endpoint] = &[
    // every raw transaction row, for the banner carousel
    Endpoint {
        path: "/getBanner",
        sql: "SELECT * FROM supermarket",
    },
    // quantity per order year; YEAR stays numeric as in the MySQL original
    Endpoint {
        path: "/getShop",
        sql: "SELECT CAST(strftime('%Y', OrderDate) AS INTEGER) AS YEAR, SUM(quantity) \
              FROM supermarket GROUP BY YEAR ORDER BY SUM(quantity)",
    },
    // single-row total profit
    Endpoint {
        path: "/getProfit",
        sql: "SELECT SUM(profit) FROM supermarket",
    },
    // top 5 subcategories by quantity sold
    Endpoint {
        path: "/getSales",
        sql: "SELECT Subcategories, SUM(quantity) FROM supermarket \
              GROUP BY Subcategories ORDER BY SUM(quantity) DESC LIMIT 5",
    },
    // monthly sales line for 2019
    Endpoint {
        path: "/getYueduzexian",
        sql: "SELECT CAST(strftime('%m', OrderDate) AS INTEGER) AS month, SUM(Sales) \
              FROM supermarket WHERE strftime('%Y', OrderDate) = '2019' \
              GROUP BY month ORDER BY month",
    },
    // per-province quantity for the map widget, domestic orders only
    Endpoint {
        path: "/getDitu",
        sql: "SELECT State_Province, SUM(quantity) FROM supermarket \
              WHERE Country_Region = '中国' \
              GROUP BY State_Province ORDER BY SUM(quantity)",
    },
    // top 6 provinces by sales, domestic orders only
    Endpoint {
        path: "/getpaiming",
        sql: "SELECT State_Province, SUM(Sales) FROM supermarket \
              WHERE Country_Region = '中国' \
              GROUP BY State_Province ORDER BY SUM(Sales) DESC LIMIT 6",
    },
    // top 6 provinces by distinct customers
    Endpoint {
        path: "/getCustomerName",
        sql: "SELECT State_Province, COUNT(DISTINCT CustomerName) FROM supermarket \
              GROUP BY State_Province ORDER BY COUNT(DISTINCT CustomerName) DESC LIMIT 6",
    },
    // welcome-page product ranking, same aggregation as /getSales
    Endpoint {
        path: "/geiHuanyingcp",
        sql: "SELECT Subcategories, SUM(quantity) FROM supermarket \
              GROUP BY Subcategories ORDER BY SUM(quantity) DESC LIMIT 5",
    },
    // 2019 quantity broken down by month and category
    Endpoint {
        path: "/getfenlei",
        sql: "SELECT CAST(strftime('%m', OrderDate) AS INTEGER) AS month, category, \
              SUM(quantity) AS quantity \
              FROM supermarket WHERE strftime('%Y', OrderDate) = '2019' \
              GROUP BY month, category ORDER BY month, category",
    },
];
