//! Slide content for the two Gestão DOM decks.
//!
//! The text is fixed; each table lists the slides in presentation order.

use crate::deck::{SlideLayout, SlideSpec};

/// Output file name of the project presentation.
pub const PROJETO_PATH: &str = "apresentacao_gestao_dom.pptx";

/// The project presentation, 11 slides.
pub static PROJETO: &[SlideSpec] = &[
    SlideSpec {
        title: "Gestão DOM",
        body: "Sistema de Gestão de Operações e Pessoas\nApresentação do Projeto\nSeu Nome - Junho/2024",
        layout: SlideLayout::Title,
    },
    SlideSpec {
        title: "Introdução",
        body: "O projeto Gestão DOM foi criado para otimizar e digitalizar processos de gestão de operações e pessoas, trazendo mais eficiência, controle e integração para a empresa.\n\nObjetivo: Automatizar rotinas, centralizar informações e facilitar o acesso aos dados.",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Escopo e Funcionalidades",
        body: "- Cadastro e gestão de empregados\n- Controle de operações e tarefas\n- Fluxo de login e autenticação seguro\n- Painel administrativo responsivo\n- Integração com banco de dados Postgres\n- Internacionalização de mensagens",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Arquitetura e Tecnologias",
        body: "- Next.js (frontend e backend)\n- React\n- Material UI (tema customizado)\n- Prisma ORM\n- PostgreSQL\n- ESLint, TypeScript strict mode\n- Testes automatizados (Jest, React Testing Library)",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Fluxo de Trabalho",
        body: "1. Usuário acessa o sistema via login seguro\n2. Realiza cadastro ou consulta de empregados\n3. Gerencia operações e tarefas\n4. Todas as ações validadas por formulários acessíveis e internacionalizados\n5. Dados persistidos via Prisma/Postgres",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Boas Práticas e Regras",
        body: "- Tipagem estrita (proibido 'any')\n- Organização modular dos arquivos\n- Uso de aliases '@/src' nos imports\n- Mensagens centralizadas e internacionalizáveis\n- Formulários acessíveis e responsivos\n- Testes automatizados obrigatórios\n- Proibido arquivos duplicados ou de backup",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Desafios e Soluções",
        body: "- Padronização de formulários reutilizáveis\n- Divisão de arquivos grandes por responsabilidade\n- Integração segura com API e banco\n- Garantia de acessibilidade e responsividade\n- Centralização de mensagens para facilitar tradução",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Resultados e Benefícios",
        body: "- Código limpo, padronizado e fácil de manter\n- Experiência do usuário aprimorada\n- Facilidade para evoluir e integrar novas funções\n- Redução de erros e retrabalho\n- Base pronta para crescimento do sistema",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Próximos Passos",
        body: "- Novas integrações (ex: folha de pagamento)\n- Mais testes automatizados\n- Melhorias de UX e acessibilidade\n- Otimização de performance\n- Feedback contínuo dos usuários",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Demonstração",
        body: "(Inserir prints ou vídeo do sistema em funcionamento)\nExemplo: Cadastro de empregado, login, painel administrativo.",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Perguntas",
        body: "Dúvidas? Sugestões? Estou à disposição para responder!",
        layout: SlideLayout::TitleAndBody,
    },
];

/// Output file name of the strategic presentation.
pub const ESTRATEGICA_PATH: &str = "apresentacao_gestao_dom_estrategica.pptx";

/// The strategic presentation, 11 slides. Slide 8 places its text in a free
/// text box on a title-only layout instead of a content placeholder.
pub static ESTRATEGICA: &[SlideSpec] = &[
    SlideSpec {
        title: "Gestão DOM",
        body: "Transformando a gestão de operações e pessoas\nSeu nome – Junho/2024",
        layout: SlideLayout::Title,
    },
    SlideSpec {
        title: "Oportunidade de Negócio",
        body: "Vivemos um cenário de processos manuais e descentralizados, que limitam o crescimento e a inovação.\n\nA Gestão DOM surge para romper barreiras, trazendo agilidade, integração e inteligência para o centro do negócio.",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Proposta de Valor",
        body: "• Centralize informações e tome decisões com confiança.\n• Automatize rotinas e libere tempo para o que realmente importa.\n• Transforme dados em resultados.\n\nFrase de impacto: 'Sua equipe no centro da inovação.'",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Diferenciais Estratégicos",
        body: "• Flexibilidade e modularidade: evolua sem limites.\n• Internacionalização nativa: pronto para crescer.\n• Experiência do usuário: simples, acessível, encantadora.\n• Segurança e compliance: confiança para o futuro.\n\nFrase de impacto: 'Tecnologia que aproxima pessoas e potencializa resultados.'",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Inovação Tecnológica",
        body: "• Stack moderna: Next.js, React, Material UI, Prisma, Postgres.\n• Código limpo, padronizado e testado.\n• Integração contínua e governança de dados.\n\nFrase de impacto: 'Soluções robustas para desafios reais.'",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Impacto no Negócio",
        body: "• Redução de custos operacionais\n• Aumento da produtividade\n• Decisões mais rápidas e assertivas\n• Base sólida para inovação contínua\n\nFrase de impacto: 'Mais do que tecnologia, entregamos valor.'",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Resultados Alcançados",
        body: "• Implantação rápida e sem retrabalho\n• Feedback positivo dos usuários\n• Pronto para novas integrações e expansão\n\nFrase de impacto: 'Cada conquista é um passo rumo ao futuro.'",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Telas do Sistema",
        body: "Insira aqui os prints das principais telas do sistema.\nSugestão: Cadastro de empregado, painel administrativo, dashboard de operações.\n\nFrase de impacto: 'Visualize o futuro da sua operação em uma única tela.'",
        layout: SlideLayout::TitleOnly,
    },
    SlideSpec {
        title: "Próximos Passos Estratégicos",
        body: "• Novas integrações (ex: folha de pagamento, BI)\n• Expansão para outras unidades/países\n• Evolução contínua baseada em feedback e dados\n\nFrase de impacto: 'O amanhã começa hoje.'",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Conclusão",
        body: "Gestão DOM é mais que um sistema: é um diferencial competitivo para o negócio.\nPronto para suportar o crescimento e a transformação digital da empresa.\n\nFrase de impacto: 'Junte-se a nós nessa jornada de transformação.'",
        layout: SlideLayout::TitleAndBody,
    },
    SlideSpec {
        title: "Perguntas e Discussão",
        body: "Dúvidas? Sugestões? Vamos juntos construir o futuro da gestão!",
        layout: SlideLayout::TitleAndBody,
    },
];
