use crate::data_models::JobPosting;

const TABLE_STYLE: &str = r#"
        table {
            border-collapse: collapse;
            width: 100%;
            margin: 20px 0;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 12px;
            text-align: left;
        }
        th {
            background-color: #f2f2f2;
            font-weight: bold;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
        .keywords, .skills {
            font-size: 12px;
            color: #666;
        }
"#;

/// The table element alone, one row per posting. Byte-deterministic for a
/// given posting list; the dated header lives in `render_report` so this
/// part can be compared directly in tests.
pub fn render_table(jobs: &[JobPosting]) -> String {
    let mut table = String::from(
        "<table>\n<tr>\
         <th>Job Title</th>\
         <th>Company Name</th>\
         <th>Direct Company Job Link</th>\
         <th>5 Role-Related Keywords</th>\
         <th>5 Technical Skills</th>\
         </tr>\n",
    );

    for job in jobs {
        let keywords = job
            .keywords
            .iter()
            .take(5)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        let skills = job
            .technical_skills
            .iter()
            .take(5)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");

        table.push_str(&format!(
            "<tr>\
             <td>{}</td>\
             <td>{}</td>\
             <td><a href=\"{}\" target=\"_blank\">View Job</a></td>\
             <td class=\"keywords\">{}</td>\
             <td class=\"skills\">{}</td>\
             </tr>\n",
            job.job_title, job.company_name, job.job_link, keywords, skills
        ));
    }

    table.push_str("</table>");
    table
}

/// Complete HTML report document: styled header with the current date and
/// result count, the posting table, and a closing note.
pub fn render_report(jobs: &[JobPosting]) -> String {
    let date = chrono::Utc::now().format("%Y-%m-%d");
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<style>{style}</style>\n</head>\n<body>\n\
         <h2>TPRM Job Search Results - {date}</h2>\n\
         <p>Found {count} relevant Third Party Risk Assessment jobs in Bangalore, India &amp; Remote positions</p>\n\
         {table}\n\
         <p><strong>Note:</strong> Jobs are filtered for recent postings and focus on Third Party Risk, \
         Vendor Risk, and Supplier Risk Assessment roles in Bangalore and remote positions.</p>\n\
         <p>Best regards,<br>\nAutomated Job Search System</p>\n\
         </body>\n</html>",
        style = TABLE_STYLE,
        date = date,
        count = jobs.len(),
        table = render_table(jobs),
    )
}
